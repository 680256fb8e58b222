use std::io::{self, Write};

/// Rewrites a single console line with the completion percentage of step `n`
/// out of `total`. For `total > 100` only roughly every percent is emitted.
pub fn print_percent(n: usize, total: usize) {
    let stdout = io::stdout();
    let _ = write_percent(&mut stdout.lock(), n, total);
}

/// Like [`print_percent`], but prints a full line with the callback's output.
pub fn print_percent_with(n: usize, total: usize, callback: impl FnOnce() -> String) {
    if !should_print(n, total) {
        return;
    }
    println!("{} % : {}", percentage(n, total), callback());
}

fn should_print(n: usize, total: usize) -> bool {
    if total > 100 && n != 0 && (n + 1) % (total / 100) != 0 {
        return false;
    }
    true
}

fn percentage(n: usize, total: usize) -> usize {
    ((n * 100) as f64 / total as f64).round() as usize
}

fn write_percent(out: &mut impl Write, n: usize, total: usize) -> io::Result<()> {
    if !should_print(n, total) {
        return Ok(());
    }

    let percentage = percentage(n, total);
    write!(out, "\r{} %", percentage)?;
    if percentage == 100 {
        writeln!(out)?;
    }
    out.flush()
}
