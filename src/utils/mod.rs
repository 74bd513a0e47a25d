pub mod extension;
pub mod naming;
pub mod payload;
pub mod response;
pub mod url;
