pub mod app;
pub mod catalog;
pub mod client;
pub mod config;
pub mod data_files;
pub mod fs_utils;
pub mod index;
pub mod matcher;
pub mod torrents;
pub mod web;
