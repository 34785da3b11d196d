//! Tooling for the keypad engine: dictionary generation and inspection,
//! settings checks, and a scripted keypad simulator.

pub mod commands {
    pub mod config_ops;
    pub mod dict_ops;
    pub mod sim_ops;
}
pub mod dict_source;
pub mod script;
