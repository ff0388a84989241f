mod common;
mod import;
mod service;
