#![allow(dead_code)]

pub mod profile_server;
