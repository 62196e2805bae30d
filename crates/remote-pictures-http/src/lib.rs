pub mod client;

pub use client::HttpDownloader;
