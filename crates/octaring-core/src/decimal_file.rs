//! Plain-text decimal number files.
//!
//! A number file holds one non-negative base-10 integer on its first line. Only
//! that line is read; whitespace around the number is ignored. Saving writes the
//! decimal value of a list as the whole file contents.

use std::{fs, path::Path};

use crate::{DecimalFileError, Radix, RingDigitList, from_decimal, to_decimal_string};

/// Reads the decimal number stored in `path` into a list of the given radix.
///
/// # Errors
///
/// Returns [`DecimalFileError::Io`] if the file cannot be read,
/// [`DecimalFileError::MissingNumber`] if its first line is blank or missing, and
/// [`DecimalFileError::Parse`] if that line is not a non-negative decimal literal.
pub fn load<P>(path: P, radix: Radix) -> Result<RingDigitList, DecimalFileError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let line = text.lines().next().map(str::trim).unwrap_or_default();
    if line.is_empty() {
        return Err(DecimalFileError::MissingNumber {
            path: path.to_owned(),
        });
    }
    let list = from_decimal(radix, line)?;
    log::debug!(
        "loaded {} radix-{radix} digits from {}",
        list.len(),
        path.display()
    );
    Ok(list)
}

/// Writes the decimal value of `list` to `path`, replacing any previous contents.
///
/// # Errors
///
/// Returns [`DecimalFileError::Io`] if the file cannot be written.
pub fn save<P>(list: &RingDigitList, path: P) -> Result<(), DecimalFileError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = to_decimal_string(list);
    fs::write(path, &text)?;
    log::debug!("saved {} decimal digits to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseDecimalError;

    #[test]
    fn test_load_trims_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number.txt");
        fs::write(&path, "  83 \nignored\n").unwrap();
        let list = load(&path, Radix::OCTAL).unwrap();
        assert_eq!(list.to_vec(), [1, 2, 3]);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let blank = dir.path().join("blank.txt");
        fs::write(&blank, "   \n83\n").unwrap();
        assert!(matches!(
            load(&blank, Radix::OCTAL),
            Err(DecimalFileError::MissingNumber { .. })
        ));

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "").unwrap();
        assert!(matches!(
            load(&empty, Radix::OCTAL),
            Err(DecimalFileError::MissingNumber { .. })
        ));

        let negative = dir.path().join("negative.txt");
        fs::write(&negative, "-4\n").unwrap();
        assert!(matches!(
            load(&negative, Radix::OCTAL),
            Err(DecimalFileError::Parse(ParseDecimalError::Negative { .. }))
        ));

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load(&missing, Radix::OCTAL),
            Err(DecimalFileError::Io(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sum.txt");
        let list = RingDigitList::from_digits(Radix::OCTAL, [7, 7, 7]).unwrap();
        save(&list, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "511");
        assert_eq!(load(&path, Radix::OCTAL).unwrap(), list);

        save(&RingDigitList::new(Radix::OCTAL), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0");
    }

    #[test]
    fn test_failed_load_assertion_leaves_no_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_owned();
        let path = root.join("negative.txt");
        fs::write(&path, "-4\n").unwrap();
        let result = std::panic::catch_unwind(move || {
            let _dir = dir;
            assert!(load(&path, Radix::OCTAL).is_ok());
        });
        assert!(result.is_err());
        assert!(!root.exists());
    }
}
