pub mod cif;
