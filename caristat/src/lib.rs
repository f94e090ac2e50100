// Library interface for caristat modules
// This allows tests and the binary to import modules

pub mod catalog;
pub mod fetch;
pub mod links;
pub mod matching;
pub mod scraping;
pub mod search;
