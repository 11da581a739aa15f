/// build.rs: generate the Rys-5 regime lookup table.
///
/// Emits `$OUT_DIR/rys5_jump.rs` which contains:
///   - `JUMP5: [Regime; 60]` mapping `tcase - 1` to a regime, where
///     `tcase = floor(min(T + 1, 60))`
///
/// The table is derived from the band edges below so that the integer
/// dispatch and `Regime::interval()` can never drift apart.

use std::io::Write;

/// Upper edge (exclusive) of each table-dispatched regime, in table order.
const BANDS: [(u32, &str); 9] = [
    (1, "Band0To1"),
    (5, "Band1To5"),
    (10, "Band5To10"),
    (15, "Band10To15"),
    (20, "Band15To20"),
    (25, "Band20To25"),
    (40, "Asym25To40"),
    (59, "Asym40To59"),
    (60, "Asymptotic"),
];

const JUMP_LEN: u32 = 60;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest = std::path::Path::new(&out_dir).join("rys5_jump.rs");
    let mut f = std::io::BufWriter::new(std::fs::File::create(dest).unwrap());

    // Entry i covers T in [i, i+1); the last entry absorbs everything >= 59.
    let mut entries: Vec<&str> = Vec::with_capacity(JUMP_LEN as usize);
    for i in 0..JUMP_LEN {
        let &(_, name) = BANDS
            .iter()
            .find(|(hi, _)| i < *hi)
            .expect("band table must cover every lookup index");
        entries.push(name);
    }

    writeln!(f, "/// Regime for lookup index `tcase - 1`, `tcase = floor(min(T + 1, 60))`.").unwrap();
    writeln!(f, "/// Generated by build.rs from the band edges.").unwrap();
    writeln!(f, "pub(crate) const JUMP5: [Regime; {JUMP_LEN}] = [").unwrap();
    for chunk in entries.chunks(4) {
        let line = chunk
            .iter()
            .map(|n| format!("Regime::{n}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "    {line},").unwrap();
    }
    writeln!(f, "];").unwrap();
}
