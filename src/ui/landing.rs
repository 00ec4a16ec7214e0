//! The marketing landing screen and the sign-in stub.

use inquire::{Password, PasswordDisplayMode, Select, Text};

use super::{Page, View};

const SIGN_IN_OPT: &str = "🔐 Sign In";
const GET_STARTED_OPT: &str = "🚀 Get Started - It's Free!";
const QUIT_OPT: &str = "👋 Quit";

pub fn landing_screen() -> View {
    println!();
    println!("✨ InvoiceFlow · effortless invoicing for freelancers");
    println!();
    println!("Stop chasing payments. Start getting paid.");
    println!("Create GST-compliant invoices in minutes, see what's outstanding");
    println!("at a glance, and keep every client in one place.");
    println!();

    let options = vec![SIGN_IN_OPT, GET_STARTED_OPT, QUIT_OPT];
    match Select::new("Welcome:", options).prompt() {
        Ok(SIGN_IN_OPT) | Ok(GET_STARTED_OPT) => View::Login,
        _ => View::Quit,
    }
}

/// Authentication stub: any non-empty email and password sign you in.
pub fn login_screen() -> View {
    println!();
    println!("--- Sign In ---");
    println!("Sign in to continue to your dashboard.");

    let email = match Text::new("Email Address:").prompt() {
        Ok(email) => email,
        Err(_) => return View::Landing,
    };
    let password = match Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
    {
        Ok(password) => password,
        Err(_) => return View::Landing,
    };

    if email.trim().is_empty() || password.is_empty() {
        println!("❌ Enter an email and a password to sign in.");
        return View::Login;
    }

    println!("✅ Welcome back!");
    View::App(Page::Dashboard)
}
