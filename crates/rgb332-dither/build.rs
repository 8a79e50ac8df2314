use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Grid resolution per channel of the nearest-color table.
const GRID_LEVELS: usize = 16;

/// Red and green palette levels (3 bits each).
const LEVELS_3BIT: [u8; 8] = [0x00, 0x24, 0x48, 0x6D, 0x91, 0xB6, 0xDA, 0xFF];

/// Blue palette levels (2 bits).
const LEVELS_2BIT: [u8; 4] = [0x00, 0x55, 0xAA, 0xFF];

/// Blue grid cell to blue palette level.
///
/// Cells are not split evenly: the two end levels get three cells each and
/// the middle levels get five, which keeps saturated blues from washing out.
const BLUE_CELL_TO_LEVEL: [u8; GRID_LEVELS] = [0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("palette_tables.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Palette: index bits are RRRGGGBB
    writeln!(file, "/// The 256 colors reachable by the grid-nearest mapper.").unwrap();
    writeln!(file, "/// Index layout: `RRRGGGBB`, one RGB triple per entry.").unwrap();
    writeln!(file, "pub static PALETTE: [[u8; 3]; 256] = [").unwrap();
    for i in 0..256usize {
        let r = LEVELS_3BIT[i >> 5];
        let g = LEVELS_3BIT[(i >> 2) & 0x07];
        let b = LEVELS_2BIT[i & 0x03];
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    [0x{r:02X}, 0x{g:02X}, 0x{b:02X}],").unwrap();
    }
    writeln!(file, "\n];").unwrap();

    writeln!(file).unwrap();

    // Nearest-color grid (16x16x16 cells -> palette index)
    writeln!(file, "/// Nearest palette index for each cell of the reduced color grid.").unwrap();
    writeln!(file, "/// Index: `(r_cell << 8) | (g_cell << 4) | b_cell`").unwrap();
    writeln!(file, "pub static NEAREST_COLOR_GRID: [u8; 4096] = [").unwrap();
    for r in 0..GRID_LEVELS {
        for g in 0..GRID_LEVELS {
            write!(file, "   ").unwrap();
            for b in 0..GRID_LEVELS {
                let index = ((r / 2) << 5) | ((g / 2) << 2) | BLUE_CELL_TO_LEVEL[b] as usize;
                write!(file, " 0x{index:02X},").unwrap();
            }
            writeln!(file).unwrap();
        }
    }
    writeln!(file, "];").unwrap();

    // Rerun if build.rs changes
    println!("cargo::rerun-if-changed=build.rs");
}
