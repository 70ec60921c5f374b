//! Demo caller of the library.
//!
//! The library reports every recursion level through the `log` facade; this binary installs no
//! logger, so those records stay silent here.
use anyhow::Context;
use clap::Parser;

/// Print the suffix array of a text, then every suffix in sorted order
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to sort
    #[arg(default_value = "mmiissiissiippii")]
    text: String,

    /// Also list the suffix made of the sentinel alone, printed as `$`
    #[arg(short, long)]
    sentinel: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let chars = args.text.chars().collect::<Vec<_>>();
    let (ranks, alphabet_size) = sais::rank_symbols(&chars);

    let sa: Vec<u32> = if args.sentinel {
        sais::compute_suffix_array_with_sentinel::<usize, u32>(&ranks, alphabet_size)
    } else {
        sais::compute_suffix_array::<usize, u32>(&ranks, alphabet_size)
    }
    .with_context(|| format!("Failed to sort the suffixes of '{}'", args.text))?;

    let line = sa.iter().map(|i| i.to_string()).collect::<Vec<_>>();
    println!("{}", line.join(" "));

    for &i in &sa {
        let suffix = chars[i as usize..].iter().collect::<String>();
        if args.sentinel {
            println!("{suffix}$");
        } else {
            println!("{suffix}");
        }
    }

    Ok(())
}
