pub mod pro_key;
pub mod receipt;
