use serde::Serialize;
use std::fmt;

/// Separator placed between station names when a trail is rendered
pub const TRAIL_SEPARATOR: &str = " -> ";

/// Character that introduces a line marker inside a station name, e.g. `"Sadar~2"`
pub const LINE_MARKER: char = '~';

/// Ordered sequence of station names making up a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trail {
    stations: Vec<String>,
}

impl Trail {
    /// A trail that starts (and so far ends) at `station`
    pub fn new(station: &str) -> Self {
        Trail {
            stations: vec![station.to_string()],
        }
    }

    /// Builds a trail from an ordered list of stations
    pub fn from_stations<I, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Trail {
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn first(&self) -> Option<&str> {
        self.stations.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }

    /// Number of connections travelled
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Consecutive station pairs along the trail
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.stations
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Line changes along the rendered trail, see [`count_interchanges`]
    pub fn interchanges(&self) -> usize {
        count_interchanges(&self.to_string())
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stations.join(TRAIL_SEPARATOR))
    }
}

/// Counts line changes in a rendered trail
///
/// Every [`LINE_MARKER`] is followed by a one-character line code. The count is
/// the number of times that code differs from the previous marker's code. A
/// trail without markers has no interchanges.
pub fn count_interchanges(trail: &str) -> usize {
    let mut lines = trail
        .match_indices(LINE_MARKER)
        .map(|(pos, _)| trail[pos + LINE_MARKER.len_utf8()..].chars().next());

    let mut last_line = match lines.next() {
        Some(line) => line,
        None => return 0,
    };

    let mut count = 0;
    for line in lines {
        if line != last_line {
            count += 1;
            last_line = line;
        }
    }
    count
}
