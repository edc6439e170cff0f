//! Thin CLI driver for `e2e-ratchet-core`.
//!
//! This is a one-shot demonstration binary, not the interactive front-end
//! the specification describes and explicitly scopes out of the core. It
//! exists to exercise the library end-to-end from the outside, the way
//! `guard-cli` exercises `guard-core`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use e2e_ratchet_core::Session;

#[derive(Parser)]
#[command(name = "e2e-ratchet-cli")]
#[command(about = "Demo driver for the two-party ratchet session core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full handshake + message exchange between two in-memory peers.
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let mut alice = Session::new();
    let mut bob = Session::new();

    let alice_pub = alice.public_key_base64();
    let bob_pub = bob.public_key_base64();
    println!("alice pubkey: {alice_pub}");
    println!("bob   pubkey: {bob_pub}");

    alice
        .set_peer_public_key(&bob_pub)
        .context("alice failed to complete the handshake with bob's public key")?;
    bob.set_peer_public_key(&alice_pub)
        .context("bob failed to complete the handshake with alice's public key")?;

    let words = alice
        .verification_words()
        .expect("handshake just completed");
    println!(
        "verification words: {}",
        e2e_ratchet_core::sas::render(&words.iter().map(String::as_str).collect::<Vec<_>>())
    );
    println!(
        "alice is_initiator={} bob is_initiator={}",
        alice.is_initiator(),
        bob.is_initiator()
    );

    let c0 = alice.encrypt("hello bob").context("alice failed to encrypt message 0")?;
    let c1 = alice.encrypt("how are you?").context("alice failed to encrypt message 1")?;
    let c2 = alice
        .encrypt("this one arrives first")
        .context("alice failed to encrypt message 2")?;

    println!("alice -> bob [0]: {c0}");
    println!("alice -> bob [1]: {c1}");
    println!("alice -> bob [2]: {c2}");

    // Deliver out of order to show the skipped-key cache in action.
    let m2 = bob.decrypt(&c2).context("bob failed to decrypt message 2")?;
    println!("bob decrypts [2] first: {m2}");
    let m0 = bob.decrypt(&c0).context("bob failed to decrypt message 0")?;
    println!("bob decrypts [0]: {m0}");
    let m1 = bob.decrypt(&c1).context("bob failed to decrypt message 1")?;
    println!("bob decrypts [1]: {m1}");

    let reply = bob
        .encrypt("got all three, thanks")
        .context("bob failed to encrypt the reply")?;
    println!("bob -> alice [0]: {reply}");
    let decrypted_reply = alice
        .decrypt(&reply)
        .context("alice failed to decrypt bob's reply")?;
    println!("alice decrypts reply: {decrypted_reply}");

    let (send, recv) = alice.message_stats();
    println!("alice message_stats = ({send}, {recv})");

    Ok(())
}
