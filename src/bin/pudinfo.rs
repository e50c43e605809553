//! Inspect a PUD map file: summary, section listing, playability check,
//! optional minimap dump.

use clap::Parser;
use pud::{names, OpenMode, Owner, Player, Pud, Reader, Section};

#[derive(Parser)]
#[command(name = "pudinfo")]
#[command(about = "Inspect a Warcraft II PUD map file")]
struct Args {
    /// Map file to inspect
    file: String,

    /// List the sections present in the file
    #[arg(long)]
    sections: bool,

    /// Run the playability check
    #[arg(long)]
    check: bool,

    /// Write the minimap to a PPM file
    #[arg(long, value_name = "OUT.ppm")]
    minimap: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.sections {
        list_sections(&args.file)?;
    }

    let mut map = Pud::open(&args.file, OpenMode::READ)?;
    map.parse()?;

    println!("file        : {}", args.file);
    println!("tag         : {:#010x}", map.tag);
    println!("version     : {:#06x}", map.version);
    println!("description : {}", map.description_str());
    println!("era         : {}", names::era_name(map.era));
    println!("dimensions  : {}x{}", map.width(), map.height());
    println!("units       : {}", map.units.len());

    for player in Player::COLORS {
        let owner = map.owners.of(player);
        if Owner::from_u8(owner) == Some(Owner::Nobody) {
            continue;
        }
        println!(
            "player {:<7}: owner {:#04x}, gold {}, lumber {}, oil {}",
            names::color_name(player),
            owner,
            map.start_gold.of(player),
            map.start_lumber.of(player),
            map.start_oil.of(player),
        );
    }

    if args.check {
        match map.check() {
            Ok(()) => println!("check       : valid"),
            Err(violation) => println!("check       : {violation}"),
        }
    }

    if let Some(out) = args.minimap {
        map.minimap_to_ppm(&out)?;
        println!("minimap     : {out}");
    }

    Ok(())
}

/// Walk the raw stream and print each section header, known or not.
fn list_sections(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let mut r = Reader::new(&data);
    while !r.is_empty() {
        let at = r.position();
        let tag = r.read_tag()?;
        let len = r.read_u32_le()? as usize;
        r.skip(len)?;
        let label = match Section::from_tag(tag) {
            Some(section) => section.name().to_string(),
            None => format!("{:?} (unknown)", String::from_utf8_lossy(&tag)),
        };
        println!("{at:#010x}  {label}  {len} bytes");
    }
    Ok(())
}
