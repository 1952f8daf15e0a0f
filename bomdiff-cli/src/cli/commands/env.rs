//! `env`: show the effective NetSuite environment with secrets masked

use anyhow::Result;
use colored::*;
use std::path::Path;

use bomdiff_cli::config::credentials::{
    CONSUMER_KEY_VAR, CONSUMER_SECRET_VAR, DOMAIN_VAR, REALM_VAR, TOKEN_ID_VAR, TOKEN_SECRET_VAR,
};
use bomdiff_cli::config::mask_secret;

pub fn handle_env_command(env_file: Option<&Path>) -> Result<()> {
    let var = |key: &str| std::env::var(key).ok();

    println!("{}", "--- ENV ---".dimmed());
    println!("CWD:    {}", std::env::current_dir()?.display());
    match env_file {
        Some(path) => println!(".env:   {}", path.display()),
        None => println!(".env:   {}", "(not found)".yellow()),
    }
    println!("REALM:  {:?}", var(REALM_VAR).unwrap_or_default());
    println!("DOMAIN: {:?}", var(DOMAIN_VAR).unwrap_or_default());
    println!("CK:     {}", mask_secret(var(CONSUMER_KEY_VAR).as_deref()));
    println!("CS:     {}", mask_secret(var(CONSUMER_SECRET_VAR).as_deref()));
    println!("TID:    {}", mask_secret(var(TOKEN_ID_VAR).as_deref()));
    println!("TS:     {}", mask_secret(var(TOKEN_SECRET_VAR).as_deref()));
    println!("{}", "--- END ---".dimmed());

    Ok(())
}
