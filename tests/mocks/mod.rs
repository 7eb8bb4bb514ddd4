#![allow(dead_code)]

pub mod bakery_backend;
