//! MGRS 100 km grid square lettering.
//!
//! Column letters come from one of three eight-letter sets chosen by the zone number;
//! row letters cycle through twenty letters every 2,000 km of northing, offset by five
//! letters in even-numbered zones. I and O are never used.

use crate::core::constants::{GRID_SQUARE_SIZE, ROW_CYCLE};
use crate::error::UtmError;

const COLUMN_SETS: [&[u8; 8]; 3] = [b"STUVWXYZ", b"ABCDEFGH", b"JKLMNPQR"];
const ROW_LETTERS: &[u8; 20] = b"ABCDEFGHJKLMNPQRSTUV";
const EVEN_ZONE_ROW_OFFSET: i64 = 5;

fn column_set(zone_number: u8) -> &'static [u8; 8] {
    COLUMN_SETS[(zone_number % 3) as usize]
}

fn row_offset(zone_number: u8) -> i64 {
    if zone_number % 2 == 0 {
        EVEN_ZONE_ROW_OFFSET
    } else {
        0
    }
}

/// A zone-relative position split into its 100 km square and the meters inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSquare {
    pub letters: String,
    pub easting: u32,
    pub northing: u32,
}

/// Names the 100 km square containing a zone-relative position.
///
/// Fractional meters are floored. The easting must fall in one of the eight columns
/// (100,000 to 899,999 m).
pub fn encode(zone_number: u8, easting: f64, northing: f64) -> Result<GridSquare, UtmError> {
    if !easting.is_finite() || !northing.is_finite() {
        return Err(UtmError::InvalidCoordinate(format!(
            "easting {} / northing {} must be finite",
            easting, northing
        )));
    }

    let size = GRID_SQUARE_SIZE as i64;
    let east = easting.floor() as i64;
    let north = northing.floor() as i64;

    let column = east.div_euclid(size);
    if !(1..=8).contains(&column) {
        return Err(UtmError::OutOfGrid(format!(
            "easting {} is outside the 100 km columns of zone {}",
            easting, zone_number
        )));
    }

    let row = (north.div_euclid(size) + row_offset(zone_number)).rem_euclid(20);

    let col_letter = column_set(zone_number)[(column - 1) as usize] as char;
    let row_letter = ROW_LETTERS[row as usize] as char;

    Ok(GridSquare {
        letters: format!("{}{}", col_letter, row_letter),
        easting: east.rem_euclid(size) as u32,
        northing: north.rem_euclid(size) as u32,
    })
}

/// Recovers the zone-relative easting and northing of a grid square position.
///
/// Row letters repeat every 2,000 km, so the northing is resolved as the first
/// candidate at or above `min_northing`.
pub fn decode(
    zone_number: u8,
    letters: &str,
    easting: u32,
    northing: u32,
    min_northing: f64,
) -> Result<(f64, f64), UtmError> {
    let bytes = letters.as_bytes();
    if bytes.len() != 2 {
        return Err(UtmError::InvalidGridSquare(letters.to_string()));
    }
    let col_letter = bytes[0].to_ascii_uppercase();
    let row_letter = bytes[1].to_ascii_uppercase();

    let column = column_set(zone_number)
        .iter()
        .position(|&c| c == col_letter)
        .ok_or_else(|| {
            UtmError::InvalidGridSquare(format!(
                "{} (column {} is not used in zone {})",
                letters, col_letter as char, zone_number
            ))
        })?;
    let row = ROW_LETTERS
        .iter()
        .position(|&c| c == row_letter)
        .ok_or_else(|| UtmError::InvalidGridSquare(letters.to_string()))?;

    let size = GRID_SQUARE_SIZE as f64;
    let row = (row as i64 - row_offset(zone_number)).rem_euclid(20);
    let base = row as f64 * size;
    let cycles = ((min_northing - base) / ROW_CYCLE).ceil();

    let full_easting = (column as f64 + 1.0) * size + easting as f64;
    let full_northing = base + cycles * ROW_CYCLE + northing as f64;

    Ok((full_easting, full_northing))
}
