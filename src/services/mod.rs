//! Domain services operating on `AppState`.

pub mod surcharge;
