//! Main module for docmark library functionality

pub mod ast;
pub mod building;
pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod highlight;
pub mod inlines;
pub mod lexing;
pub mod resolvers;
pub mod testing;
pub mod token;
