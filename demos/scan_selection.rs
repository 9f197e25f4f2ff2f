use mersenne_scan::{annotate, scan, valid_exponents};
use std::io::Read;

/// Read a text selection from the arguments, or from stdin if there are none
fn selection() -> std::io::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn main() -> std::io::Result<()> {
    let text = selection()?;
    let text = text.trim();

    for (candidate, status) in scan(text, None) {
        println!("{:>24} {:?}", candidate.text(), status);
    }

    match annotate(text, None) {
        Some(exponents) => println!("Open exponents ({})", exponents.join(", ")),
        None => println!("No exponents found"),
    }
    for p in valid_exponents(text, None) {
        println!("https://www.mersenne.org/M{}", p);
    }
    Ok(())
}
