pub mod app;
pub mod dispatch;
pub mod ds;
pub mod history;
pub mod plugin;
pub mod settings;
pub mod std_lib;
