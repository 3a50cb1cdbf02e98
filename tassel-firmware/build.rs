//! Build script for tassel-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml and generates the message catalog from it

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tassel_core::glyph::{encode_text, GlyphError, MAX_TEXT_LEN};
use tassel_core::{DisplayConfig, Glyph};

/// Top level of display.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayFile {
    #[serde(default)]
    display: DisplayConfig,
    #[serde(default, rename = "message")]
    messages: Vec<MessageEntry>,
}

/// One `[[message]]` table: either `text` or raw `glyphs`
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageEntry {
    text: Option<String>,
    glyphs: Option<Vec<Glyph>>,
}

/// A validated message ready for code generation
struct EncodedMessage {
    label: String,
    glyphs: Vec<u8>,
}

fn main() {
    setup_linker();

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let file = load_display_file(Path::new("display.toml"));
    let messages = encode_messages(&file.messages);
    validate_display(&file.display);

    let source = generate_source(&file.display, &messages);
    fs::write(out_dir.join("generated.rs"), source).unwrap();

    println!(
        "cargo:warning=display.toml: {} message(s), scroll step every {} ticks",
        messages.len(),
        file.display.scroll_period_ticks
    );
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Linker scripts only apply to the embedded target
    if env::var("TARGET").is_ok_and(|target| target.starts_with("thumb")) {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse display.toml
fn load_display_file(path: &Path) -> DisplayFile {
    println!("cargo:rerun-if-changed={}", path.display());

    if !path.exists() {
        fail(
            "display.toml not found!",
            &[
                "The firmware requires a display.toml file in the".to_string(),
                "tassel-firmware directory with at least one [[message]].".to_string(),
            ],
        );
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[format!("Error: {}", e)]),
    };

    match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => fail(
            "Invalid display.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    }
}

/// Validate timing values that serde cannot reject on its own
fn validate_display(display: &DisplayConfig) {
    if display.tick_period_us == 0 {
        fail(
            "Invalid [display] section in display.toml",
            &["tick_period_us must be greater than 0".to_string()],
        );
    }
}

/// Turn every `[[message]]` table into glyph bytes
fn encode_messages(entries: &[MessageEntry]) -> Vec<EncodedMessage> {
    if entries.is_empty() {
        fail(
            "No messages in display.toml",
            &["Add at least one [[message]] table with `text` or `glyphs`".to_string()],
        );
    }

    let mut errors = Vec::new();
    let mut messages = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let encoded = match (&entry.text, &entry.glyphs) {
            (Some(text), None) => match encode_text::<MAX_TEXT_LEN>(text) {
                Ok(glyphs) => EncodedMessage {
                    label: text.clone(),
                    glyphs: glyphs.iter().map(|g| g.bits()).collect(),
                },
                Err(GlyphError::Unsupported(c)) => {
                    errors.push(format!("message {}: cannot display {:?}", index, c));
                    continue;
                }
                Err(GlyphError::TooLong) => {
                    errors.push(format!(
                        "message {}: text longer than {} glyphs, use `glyphs`",
                        index, MAX_TEXT_LEN
                    ));
                    continue;
                }
            },
            (None, Some(glyphs)) => EncodedMessage {
                label: format!("glyphs[{}]", glyphs.len()),
                glyphs: glyphs.iter().map(|g| g.bits()).collect(),
            },
            (Some(_), Some(_)) => {
                errors.push(format!("message {}: set `text` or `glyphs`, not both", index));
                continue;
            }
            (None, None) => {
                errors.push(format!("message {}: missing `text` or `glyphs`", index));
                continue;
            }
        };

        if encoded.glyphs.is_empty() {
            errors.push(format!("message {}: must have at least one glyph", index));
            continue;
        }

        messages.push(encoded);
    }

    if !errors.is_empty() {
        fail("Invalid [[message]] entries in display.toml", &errors);
    }

    messages
}

/// Emit the Rust source included by `src/catalog.rs`
fn generate_source(display: &DisplayConfig, messages: &[EncodedMessage]) -> String {
    let mut out = String::new();

    writeln!(out, "// Generated by build.rs from display.toml. Do not edit.").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "pub const DISPLAY_CONFIG: DisplayConfig = DisplayConfig {{").unwrap();
    writeln!(out, "    tick_period_us: {},", display.tick_period_us).unwrap();
    writeln!(
        out,
        "    scroll_period_ticks: match NonZeroU32::new({}) {{ Some(p) => p, None => panic!() }},",
        display.scroll_period_ticks
    )
    .unwrap();
    writeln!(out, "    digit_polarity: Polarity::{:?},", display.digit_polarity).unwrap();
    writeln!(out, "}};").unwrap();
    writeln!(out).unwrap();

    for (index, message) in messages.iter().enumerate() {
        let glyphs = message
            .glyphs
            .iter()
            .map(|bits| format!("Glyph::from_bits(0x{:02X})", bits))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "static MESSAGE_{}: [Glyph; {}] = [{}];",
            index,
            message.glyphs.len(),
            glyphs
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    let refs = (0..messages.len())
        .map(|index| format!("message(&MESSAGE_{})", index))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        out,
        "pub static MESSAGES: [Message<'static>; {}] = [{}];",
        messages.len(),
        refs
    )
    .unwrap();

    let labels = messages
        .iter()
        .map(|message| format!("{:?}", message.label))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        out,
        "pub const MESSAGE_LABELS: [&str; {}] = [{}];",
        messages.len(),
        labels
    )
    .unwrap();

    out
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
