use std::collections::HashSet;
use std::io::Read;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::domain::{CriticRatingMatrix, Movie, MovieCatalog, PersonalRatings, RatingCell};
use crate::errors::{RecommendError, RecommendResult};

pub const TITLE_COLUMN: &str = "Title";
pub const GENRE_COLUMN: &str = "Genre1";
pub const YEAR_COLUMN: &str = "Year";
pub const RUNTIME_COLUMN: &str = "Runtime";

/// Reads the movie catalog. Columns other than title, genre, year and runtime
/// are ignored.
pub fn read_catalog<R: Read>(source: R) -> RecommendResult<MovieCatalog> {
    let mut reader = csv_reader(source);
    let headers = reader.headers()?.clone();
    let title_idx = column_index(&headers, TITLE_COLUMN, "catalog")?;
    let genre_idx = column_index(&headers, GENRE_COLUMN, "catalog")?;
    let year_idx = column_index(&headers, YEAR_COLUMN, "catalog")?;
    let runtime_idx = column_index(&headers, RUNTIME_COLUMN, "catalog")?;

    let mut catalog = MovieCatalog::new();
    for record in reader.records() {
        let record = record?;
        let title = required_title(&record, title_idx, "catalog")?;
        let year = parse_year(field(&record, year_idx), &title)?;
        let runtime = Some(field(&record, runtime_idx))
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        catalog.add(Movie {
            genre: field(&record, genre_idx).to_string(),
            title,
            year,
            runtime,
        })?;
    }

    debug!("Read {} catalog entries", catalog.len());
    Ok(catalog)
}

/// Reads the critic ratings. Every column except the title is a critic.
pub fn read_critics<R: Read>(source: R) -> RecommendResult<CriticRatingMatrix> {
    let mut reader = csv_reader(source);
    let headers = reader.headers()?.clone();
    let title_idx = column_index(&headers, TITLE_COLUMN, "critic ratings")?;

    let critic_columns: Vec<usize> = (0..headers.len()).filter(|&i| i != title_idx).collect();
    let critics = critic_columns
        .iter()
        .map(|&i| headers[i].to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let title = required_title(&record, title_idx, "critic ratings")?;
        let cells = critic_columns
            .iter()
            .map(|&i| parse_rating(field(&record, i), &title, &headers[i]))
            .collect::<RecommendResult<Vec<RatingCell>>>()?;
        rows.push((title, cells));
    }

    debug!("Read critic ratings for {} titles", rows.len());
    CriticRatingMatrix::new(critics, rows)
}

/// Reads one person's ratings. The single non-title column header is the
/// person's name; blank cells mean the title is unrated.
pub fn read_personal<R: Read>(source: R) -> RecommendResult<PersonalRatings> {
    let mut reader = csv_reader(source);
    let headers = reader.headers()?.clone();
    let title_idx = column_index(&headers, TITLE_COLUMN, "personal ratings")?;

    let rating_columns: Vec<usize> = (0..headers.len()).filter(|&i| i != title_idx).collect();
    let [rating_idx] = rating_columns[..] else {
        return Err(RecommendError::malformed(format!(
            "personal ratings need exactly one rating column, found {}",
            rating_columns.len()
        )));
    };
    let person = &headers[rating_idx];

    let mut personal = PersonalRatings::new(person);
    let mut seen_titles = HashSet::new();
    for record in reader.records() {
        let record = record?;
        let title = required_title(&record, title_idx, "personal ratings")?;
        // blank rows still claim their title
        if !seen_titles.insert(title.clone()) {
            return Err(RecommendError::malformed(format!(
                "duplicate personal ratings title '{}'",
                title
            )));
        }
        let Some(rating) = parse_rating(field(&record, rating_idx), &title, person)? else {
            debug!("  → '{}' has no personal rating, treating as unwatched", title);
            continue;
        };
        personal.insert(title, rating);
    }

    debug!("Read {} personal ratings for {}", personal.len(), person);
    Ok(personal)
}

fn csv_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(source)
}

fn column_index(headers: &StringRecord, name: &str, table: &str) -> RecommendResult<usize> {
    let mut matches = headers.iter().enumerate().filter(|(_, h)| *h == name);
    match (matches.next(), matches.next()) {
        (Some((idx, _)), None) => Ok(idx),
        (None, _) => Err(RecommendError::malformed(format!(
            "{} table is missing the '{}' column",
            table, name
        ))),
        (Some(_), Some(_)) => Err(RecommendError::malformed(format!(
            "{} table has more than one '{}' column",
            table, name
        ))),
    }
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn required_title(record: &StringRecord, idx: usize, table: &str) -> RecommendResult<String> {
    let title = field(record, idx);
    if title.is_empty() {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        return Err(RecommendError::malformed(format!(
            "{} row on line {} has no title",
            table, line
        )));
    }
    Ok(title.to_string())
}

fn parse_rating(raw: &str, title: &str, column: &str) -> RecommendResult<RatingCell> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .map(Some)
        .ok_or_else(|| {
            RecommendError::malformed(format!(
                "rating '{}' for '{}' by '{}' is not a number",
                raw, title, column
            ))
        })
}

fn parse_year(raw: &str, title: &str) -> RecommendResult<i32> {
    let invalid = || RecommendError::malformed(format!("year '{}' for '{}' is invalid", raw, title));
    if let Ok(year) = raw.parse::<i32>() {
        return Ok(year);
    }
    // Spreadsheet exports sometimes write "2001.0"
    let year = raw.parse::<f64>().map_err(|_| invalid())?;
    if year.fract() != 0.0 || !(i32::MIN as f64..=i32::MAX as f64).contains(&year) {
        return Err(invalid());
    }
    Ok(year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
Title,Genre1,Genre2,Year,Runtime
Alien,Horror,Sci-Fi,1979,1 hr. 57 min.
Heat,Crime,,1995.0,
";

    const CRITICS: &str = "\
Title,Ann,Bob,Cid
Alien,4,,2.5
Heat,3,5,1
";

    #[test]
    fn test_read_catalog() {
        let catalog = read_catalog(CATALOG.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        let alien = catalog.get("Alien").unwrap();
        assert_eq!(alien.genre, "Horror");
        assert_eq!(alien.year, 1979);
        assert_eq!(alien.runtime.as_deref(), Some("1 hr. 57 min."));
        let heat = catalog.get("Heat").unwrap();
        assert_eq!(heat.year, 1995);
        assert_eq!(heat.runtime, None);
    }

    #[test]
    fn test_catalog_requires_key_columns() {
        let err = read_catalog("Name,Genre1,Year,Runtime\nAlien,Horror,1979,\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("missing the 'Title' column"));
    }

    #[test]
    fn test_catalog_rejects_bad_year() {
        let err =
            read_catalog("Title,Genre1,Year,Runtime\nAlien,Horror,soon,\n".as_bytes()).unwrap_err();
        assert!(matches!(err, RecommendError::MalformedInput(_)));
    }

    #[test]
    fn test_read_critics() {
        let matrix = read_critics(CRITICS.as_bytes()).unwrap();

        assert_eq!(matrix.critics(), ["Ann", "Bob", "Cid"].map(String::from).as_slice());
        assert_eq!(
            matrix.row("Alien").unwrap().to_vec(),
            vec![Some(4.0), None, Some(2.5)]
        );
    }

    #[test]
    fn test_critics_title_column_may_be_anywhere() {
        let matrix = read_critics("Ann,Title,Bob\n1,Heat,2\n".as_bytes()).unwrap();
        assert_eq!(matrix.critics(), ["Ann", "Bob"].map(String::from).as_slice());
        assert_eq!(matrix.row("Heat").unwrap().to_vec(), vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_critics_reject_non_numeric_and_duplicates() {
        let bad = read_critics("Title,Ann\nHeat,great\n".as_bytes()).unwrap_err();
        assert!(bad.to_string().contains("not a number"));

        let dup = read_critics("Title,Ann\nHeat,1\nHeat,2\n".as_bytes()).unwrap_err();
        assert!(dup.to_string().contains("duplicate"));
    }

    #[test]
    fn test_read_personal() {
        let personal =
            read_personal("Title,Jordan\nAlien,4\nHeat,\n".as_bytes()).unwrap();

        assert_eq!(personal.person(), "Jordan");
        assert_eq!(personal.get("Alien"), Some(4.0));
        assert!(!personal.has_rated("Heat"));
        assert_eq!(personal.len(), 1);
    }

    #[test]
    fn test_personal_needs_one_rating_column() {
        let err = read_personal("Title,Jordan,Sam\nAlien,4,3\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("exactly one rating column, found 2"));

        let dup = read_personal("Title,Jordan\nAlien,4\nAlien,2\n".as_bytes()).unwrap_err();
        assert!(matches!(dup, RecommendError::MalformedInput(_)));
    }

    #[test]
    fn test_personal_rejects_duplicate_with_blank_rating() {
        for input in ["Title,Jordan\nAlien,4\nAlien,\n", "Title,Jordan\nAlien,\nAlien,3\n"] {
            let err = read_personal(input.as_bytes()).unwrap_err();
            assert!(err.to_string().contains("duplicate personal ratings title 'Alien'"));
        }
    }

    #[test]
    fn test_critics_and_personal_require_title_column() {
        let critics = read_critics("Name,Ann\nHeat,1\n".as_bytes()).unwrap_err();
        assert!(critics.to_string().contains("critic ratings table is missing the 'Title' column"));

        let personal = read_personal("Name,Jordan\nHeat,1\n".as_bytes()).unwrap_err();
        assert!(personal.to_string().contains("personal ratings table is missing the 'Title' column"));
    }
}
