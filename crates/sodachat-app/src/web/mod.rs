// Static hosting for the browser client
pub mod server;
