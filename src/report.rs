//! Console messages shown around an encoding run.

use std::io::{self, Write};

use crate::{envs::SECRET_NAME, EncodedOutput};

const WIDTH: usize = 60;

fn rule(out: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(out, "{}", c.to_string().repeat(WIDTH))
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    rule(out, '=')?;
    writeln!(out, "🔐 Android Keystore → Base64 Converter")?;
    rule(out, '=')?;
    writeln!(out)
}

/// Progress lines, the upload instructions unless `quiet`, and the size summary.
pub fn success(out: &mut impl Write, x: &EncodedOutput, quiet: bool) -> io::Result<()> {
    let output = x.output_path().display();

    writeln!(out, "✅ Keystore read: {} bytes", x.byte_count())?;
    writeln!(out, "✅ Base64 encoding done: {} characters", x.char_count())?;
    writeln!(out, "✅ '{}' created!", output)?;
    writeln!(out)?;

    if !quiet {
        rule(out, '═')?;
        writeln!(out, "🎯 SUCCESS! Next steps:")?;
        rule(out, '═')?;
        writeln!(out, "1. Open '{}' in a text editor", output)?;
        writeln!(out, "2. Copy ALL of its contents (Ctrl+A, Ctrl+C)")?;
        writeln!(out, "3. GitHub → Repository → Settings → Secrets → Actions")?;
        writeln!(out, "4. 'New repository secret' → Name: {}", SECRET_NAME)?;
        writeln!(out, "5. Paste into the Value field")?;
        rule(out, '═')?;
        writeln!(out)?;
    }

    writeln!(out, "📊 Base64 string length: {} characters", x.char_count())?;
    writeln!(out, "📦 Original file size: {} bytes", x.byte_count())?;
    writeln!(out)
}

pub fn error(out: &mut impl Write, e: &crate::Error) -> io::Result<()> {
    writeln!(out, "❌ ERROR: {}", e)
}

pub fn finished(out: &mut impl Write, ok: bool) -> io::Result<()> {
    if ok {
        writeln!(out, "✅ Done!")
    } else {
        writeln!(out, "❌ Failed!")
    }
}
