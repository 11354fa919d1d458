//! The DmfRecord type - one parsed Death Master File record.
//!
//! Layout reference: <https://en.wikipedia.org/wiki/Death_Master_File>
//!
//! ```text
//! POSITION   1      BLANK, OR A (ADD), C (CHANGE), OR D (DELETE)
//! POSITION   2-10   SOCIAL SECURITY NUMBER
//! POSITION  11-30   LAST NAME
//! POSITION  31-34   NAME SUFFIX
//! POSITION  35-49   FIRST NAME
//! POSITION  50-64   MIDDLE NAME
//! POSITION  65      V OR P CODE (VERIFIED OR PROOF CODE)
//! POSITION  66-73   DATE OF DEATH (MM,DD,CC,YY)
//! POSITION  74-81   DATE OF BIRTH (MM,DD,CC,YY)
//! POSITION  82-100  BLANKS
//! ```

use std::ops::Range;

use crate::normalize::{expand_type_code, expand_verified_code, reformat_date, title_case};

/// Length of one DMF record line, excluding the line terminator.
pub const RECORD_LEN: usize = 100;

/// Column header of the produced CSV, written once before any data rows.
pub const CSV_HEADER: [&str; 13] = [
    "Type",
    "Social Security Number",
    "Last Name",
    "Name Suffix",
    "First Name",
    "Middle Name",
    "Verified",
    "Date of Death",
    "Date of Birth",
    "Blank 1",
    "Blank2",
    "Blank 3",
    "Blank 4",
];

const TYPE: Range<usize> = 0..1;
const SSN: Range<usize> = 1..10;
const LAST_NAME: Range<usize> = 10..30;
const NAME_SUFFIX: Range<usize> = 30..34;
const FIRST_NAME: Range<usize> = 34..49;
const MIDDLE_NAME: Range<usize> = 49..64;
const VERIFIED: Range<usize> = 64..65;
const DATE_OF_DEATH: Range<usize> = 65..73;
const DATE_OF_BIRTH: Range<usize> = 73..81;
const BLANK_1: Range<usize> = 81..83;
const BLANK_2: Range<usize> = 83..88;
const BLANK_3: Range<usize> = 88..93;
const BLANK_4: Range<usize> = 93..100;

/// Extracts one field: byte slice at the fixed offsets, decoded, trimmed.
///
/// Slicing happens on the raw bytes, so invalid UTF-8 in one field can
/// never shift a neighbor's offsets.
fn field(line: &[u8], range: Range<usize>) -> String {
    String::from_utf8_lossy(&line[range]).trim().to_string()
}

/// A single Death Master File record with all 13 fields extracted.
///
/// Fields are trimmed of surrounding whitespace at parse time but otherwise
/// raw; call [`DmfRecord::normalize`] to apply the code expansions, date
/// reformatting, and name title-casing.
///
/// # Example
///
/// ```
/// use dmf2csv::{DmfRecord, RECORD_LEN};
///
/// let line = format!(
///     "{:<1}{:<9}{:<20}{:<4}{:<15}{:<15}{:<1}{:<8}{:<8}{:<19}",
///     "A", "123456789", "SMITH", "JR", "JOHN", "Q", "V", "02141990", "19990101", ""
/// );
/// assert_eq!(line.len(), RECORD_LEN);
///
/// let record = DmfRecord::parse(line.as_bytes()).unwrap();
/// assert_eq!(record.ssn, "123456789");
/// assert_eq!(record.last_name, "SMITH");
///
/// let row = record.normalize().into_row();
/// assert_eq!(row[0], "Add");
/// assert_eq!(row[2], "Smith");
/// assert_eq!(row[7], "1990-02-14");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmfRecord {
    /// Record type: blank, or A (add), C (change), D (delete).
    pub record_type: String,

    /// Social security number.
    pub ssn: String,

    /// Last name.
    pub last_name: String,

    /// Name suffix.
    pub name_suffix: String,

    /// First name.
    pub first_name: String,

    /// Middle name.
    pub middle_name: String,

    /// Verified flag: V (verified) or P (proof code).
    pub verified: String,

    /// Date of death, MMDDCCYY in the raw record.
    pub date_of_death: String,

    /// Date of birth, MMDDCCYY in the raw record.
    pub date_of_birth: String,

    /// Reserved blank field, positions 82-83.
    pub blank1: String,

    /// Reserved blank field, positions 84-88.
    pub blank2: String,

    /// Reserved blank field, positions 89-93.
    pub blank3: String,

    /// Reserved blank field, positions 94-100.
    pub blank4: String,
}

impl DmfRecord {
    /// Parses one record line into its 13 trimmed fields.
    ///
    /// Returns `None` if `line` is not exactly [`RECORD_LEN`] bytes; the
    /// caller decides whether that is worth a diagnostic.
    pub fn parse(line: &[u8]) -> Option<Self> {
        if line.len() != RECORD_LEN {
            return None;
        }

        Some(Self {
            record_type: field(line, TYPE),
            ssn: field(line, SSN),
            last_name: field(line, LAST_NAME),
            name_suffix: field(line, NAME_SUFFIX),
            first_name: field(line, FIRST_NAME),
            middle_name: field(line, MIDDLE_NAME),
            verified: field(line, VERIFIED),
            date_of_death: field(line, DATE_OF_DEATH),
            date_of_birth: field(line, DATE_OF_BIRTH),
            blank1: field(line, BLANK_1),
            blank2: field(line, BLANK_2),
            blank3: field(line, BLANK_3),
            blank4: field(line, BLANK_4),
        })
    }

    /// Applies the DMF normalization rules and returns the result.
    ///
    /// Type and verified codes are expanded to words, the two dates are
    /// reformatted to `YYYY-MM-DD`, and the four name fields are
    /// title-cased. Every rule passes unrecognized input through unchanged.
    pub fn normalize(self) -> Self {
        Self {
            record_type: expand_type_code(self.record_type),
            verified: expand_verified_code(self.verified),
            date_of_death: reformat_date(self.date_of_death),
            date_of_birth: reformat_date(self.date_of_birth),
            last_name: title_case(&self.last_name),
            name_suffix: title_case(&self.name_suffix),
            first_name: title_case(&self.first_name),
            middle_name: title_case(&self.middle_name),
            ..self
        }
    }

    /// Consumes the record and returns its fields in CSV column order.
    ///
    /// The order matches [`CSV_HEADER`].
    pub fn into_row(self) -> [String; 13] {
        [
            self.record_type,
            self.ssn,
            self.last_name,
            self.name_suffix,
            self.first_name,
            self.middle_name,
            self.verified,
            self.date_of_death,
            self.date_of_birth,
            self.blank1,
            self.blank2,
            self.blank3,
            self.blank4,
        ]
    }
}
