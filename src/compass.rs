/// Translates the engine's signed azimuth to 16-point compass directions
/// for operator display. (N, NNE, NE, etc.)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    N,   // north
    NNE, // north-northeast
    NE,  // northeast
    ENE, // east-northeast
    E,   // east
    ESE, // east-southeast
    SE,  // southeast
    SSE, // south-southeast
    S,   // south
    SSW, // south-southwest
    SW,  // southwest
    WSW, // west-southwest
    W,   // west
    WNW, // west-northwest
    NW,  // northwest
    NNW, // north-northwest
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl Direction {
    pub fn name(&self) -> &str {
        match self {
            Direction::N => "north",
            Direction::NNE => "north-northeast",
            Direction::NE => "northeast",
            Direction::ENE => "east-northeast",
            Direction::E => "east",
            Direction::ESE => "east-southeast",
            Direction::SE => "southeast",
            Direction::SSE => "south-southeast",
            Direction::S => "south",
            Direction::SSW => "south-southwest",
            Direction::SW => "southwest",
            Direction::WSW => "west-southwest",
            Direction::W => "west",
            Direction::WNW => "west-northwest",
            Direction::NW => "northwest",
            Direction::NNW => "north-northwest",
        }
    }

    pub fn abbreviation(&self) -> &str {
        match self {
            Direction::N => "N",
            Direction::NNE => "NNE",
            Direction::NE => "NE",
            Direction::ENE => "ENE",
            Direction::E => "E",
            Direction::ESE => "ESE",
            Direction::SE => "SE",
            Direction::SSE => "SSE",
            Direction::S => "S",
            Direction::SSW => "SSW",
            Direction::SW => "SW",
            Direction::WSW => "WSW",
            Direction::W => "W",
            Direction::WNW => "WNW",
            Direction::NW => "NW",
            Direction::NNW => "NNW",
        }
    }
}

/// Converts an azimuth (degrees, signed or not) to a 16-point compass
/// direction, returning the direction and the heading normalized to 0-360.
pub fn azimuth_to_direction(azimuth: f64) -> (Direction, f64) {
    // normalize azimuth to 0-360 range
    let normalized = ((azimuth % 360.0) + 360.0) % 360.0;

    // each direction covers 22.5 degrees (360 / 16)
    let direction = match normalized {
        h if h < 11.25 => Direction::N,
        h if h < 33.75 => Direction::NNE,
        h if h < 56.25 => Direction::NE,
        h if h < 78.75 => Direction::ENE,
        h if h < 101.25 => Direction::E,
        h if h < 123.75 => Direction::ESE,
        h if h < 146.25 => Direction::SE,
        h if h < 168.75 => Direction::SSE,
        h if h < 191.25 => Direction::S,
        h if h < 213.75 => Direction::SSW,
        h if h < 236.25 => Direction::SW,
        h if h < 258.75 => Direction::WSW,
        h if h < 281.25 => Direction::W,
        h if h < 303.75 => Direction::WNW,
        h if h < 326.25 => Direction::NW,
        h if h < 348.75 => Direction::NNW,
        _ => Direction::N,
    };

    (direction, normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::N), "N");
        assert_eq!(format!("{}", Direction::NNE), "NNE");
        assert_eq!(format!("{}", Direction::SE), "SE");
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::N.name(), "north");
        assert_eq!(Direction::NE.name(), "northeast");
        assert_eq!(Direction::SSW.abbreviation(), "SSW");
    }

    #[test]
    fn test_signed_azimuth_normalization() {
        // The engine reports azimuth in (-180, 180].
        let (dir, heading) = azimuth_to_direction(-90.0);
        assert_eq!(heading, 270.0);
        assert_eq!(dir, Direction::W);

        let (dir, heading) = azimuth_to_direction(-10.0);
        assert_eq!(heading, 350.0);
        assert_eq!(dir, Direction::N);
    }

    #[test]
    fn test_azimuth_to_direction() {
        assert_eq!(azimuth_to_direction(0.0).0, Direction::N);
        assert_eq!(azimuth_to_direction(22.5).0, Direction::NNE);
        assert_eq!(azimuth_to_direction(45.0).0, Direction::NE);
        assert_eq!(azimuth_to_direction(90.0).0, Direction::E);
        assert_eq!(azimuth_to_direction(180.0).0, Direction::S);
        assert_eq!(azimuth_to_direction(-45.0).0, Direction::NW);
        assert_eq!(azimuth_to_direction(359.0).0, Direction::N);
    }
}
