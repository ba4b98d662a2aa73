use utm_mgrs::{Globe, MgrsCoordinate, UtmCoordinate, UtmError};

fn main() -> Result<(), UtmError> {
    let lat = 53.48082746395233;
    let lon = -2.2479699500757597;

    let globe = Globe::reference();

    let zone = globe.zone_for_point(lat, lon)?;
    println!("Zone: {}", zone);

    let utm = UtmCoordinate::from_lat_lon(lat, lon, globe)?;
    println!("UTM: {}", utm);

    let mgrs = MgrsCoordinate::from_utm(&utm, globe)?;
    println!("MGRS: {}", mgrs);
    println!("MGRS (100 m): {}", mgrs.clone().with_precision(3));

    let (back_lat, back_lon) = mgrs.to_lat_lon(globe)?;
    println!("Back to lat/lon: ({}, {})", back_lat, back_lon);

    Ok(())
}
