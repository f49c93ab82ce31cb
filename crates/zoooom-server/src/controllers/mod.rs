//! HTTP controllers: request decoding, one interactor call, response mapping.

pub mod dto;
pub mod params;
pub mod template_controller;
