//! The Forte set-class catalog.
//!
//! Prime-form digit strings (0-9, 'A' = 10, 'B' = 11) mapped to catalog
//! names, cardinalities 1 through 9. Loaded once as static data; forward
//! lookup is keyed by prime string, reverse lookup (name to prime string)
//! is a linear scan over the table.

static FORTE_TABLE: &[(&str, &str)] = &[
    ("0", "1-1"),
    ("01", "2-1"),
    ("02", "2-2"),
    ("03", "2-3"),
    ("04", "2-4"),
    ("05", "2-5"),
    ("06", "2-6"),
    ("012", "3-1"),
    ("013", "3-2"),
    ("014", "3-3"),
    ("015", "3-4"),
    ("016", "3-5"),
    ("024", "3-6"),
    ("025", "3-7"),
    ("026", "3-8"),
    ("027", "3-9"),
    ("036", "3-10"),
    ("037", "3-11"),
    ("048", "3-12"),
    ("0123", "4-1"),
    ("0124", "4-2"),
    ("0134", "4-3"),
    ("0125", "4-4"),
    ("0126", "4-5"),
    ("0127", "4-6"),
    ("0145", "4-7"),
    ("0156", "4-8"),
    ("0167", "4-9"),
    ("0235", "4-10"),
    ("0135", "4-11"),
    ("0236", "4-12"),
    ("0136", "4-13"),
    ("0237", "4-14"),
    ("0146", "4-Z15"),
    ("0157", "4-16"),
    ("0347", "4-17"),
    ("0147", "4-18"),
    ("0148", "4-19"),
    ("0158", "4-20"),
    ("0246", "4-21"),
    ("0247", "4-22"),
    ("0257", "4-23"),
    ("0248", "4-24"),
    ("0268", "4-25"),
    ("0358", "4-26"),
    ("0258", "4-27"),
    ("0369", "4-28"),
    ("0137", "4-Z29"),
    ("01234", "5-1"),
    ("01235", "5-2"),
    ("01245", "5-3"),
    ("01236", "5-4"),
    ("01237", "5-5"),
    ("01256", "5-6"),
    ("01267", "5-7"),
    ("02346", "5-8"),
    ("01246", "5-9"),
    ("01346", "5-10"),
    ("02347", "5-11"),
    ("01356", "5-Z12"),
    ("01248", "5-13"),
    ("01257", "5-14"),
    ("01268", "5-15"),
    ("01347", "5-16"),
    ("01348", "5-Z17"),
    ("01457", "5-Z18"),
    ("01367", "5-19"),
    ("01568", "5-20"),
    ("01458", "5-21"),
    ("01478", "5-22"),
    ("02357", "5-23"),
    ("01357", "5-24"),
    ("02358", "5-25"),
    ("02458", "5-26"),
    ("01358", "5-27"),
    ("02368", "5-28"),
    ("01368", "5-29"),
    ("01468", "5-30"),
    ("01369", "5-31"),
    ("01469", "5-32"),
    ("02468", "5-33"),
    ("02469", "5-34"),
    ("02479", "5-35"),
    ("01247", "5-Z36"),
    ("03458", "5-Z37"),
    ("01258", "5-Z38"),
    ("012345", "6-1"),
    ("012346", "6-2"),
    ("012356", "6-Z3"),
    ("012456", "6-Z4"),
    ("012367", "6-5"),
    ("012567", "6-Z6"),
    ("012678", "6-7"),
    ("023457", "6-8"),
    ("012357", "6-9"),
    ("013457", "6-Z10"),
    ("012457", "6-Z11"),
    ("012467", "6-Z12"),
    ("013467", "6-Z13"),
    ("013458", "6-14"),
    ("012458", "6-15"),
    ("014568", "6-16"),
    ("012478", "6-Z17"),
    ("012578", "6-18"),
    ("013478", "6-Z19"),
    ("014589", "6-20"),
    ("023468", "6-21"),
    ("012468", "6-22"),
    ("023568", "6-Z23"),
    ("013468", "6-Z24"),
    ("013568", "6-Z25"),
    ("013578", "6-Z26"),
    ("013469", "6-27"),
    ("013569", "6-Z28"),
    ("023679", "6-Z29"),
    ("013679", "6-30"),
    ("014579", "6-31"),
    ("024579", "6-32"),
    ("023579", "6-33"),
    ("013579", "6-34"),
    ("02468A", "6-35"),
    ("012347", "6-Z36"),
    ("012348", "6-Z37"),
    ("012378", "6-Z38"),
    ("023458", "6-Z39"),
    ("012358", "6-Z40"),
    ("012368", "6-Z41"),
    ("012369", "6-Z42"),
    ("012568", "6-Z43"),
    ("012569", "6-Z44"),
    ("023469", "6-Z45"),
    ("012469", "6-Z46"),
    ("012479", "6-Z47"),
    ("012579", "6-Z48"),
    ("013479", "6-Z49"),
    ("014679", "6-Z50"),
    ("0123456", "7-1"),
    ("0123457", "7-2"),
    ("0123458", "7-3"),
    ("0123467", "7-4"),
    ("0123567", "7-5"),
    ("0123478", "7-6"),
    ("0123678", "7-7"),
    ("0234568", "7-8"),
    ("0123468", "7-9"),
    ("0123469", "7-10"),
    ("0134568", "7-11"),
    ("0123479", "7-Z12"),
    ("0124568", "7-13"),
    ("0123578", "7-14"),
    ("0124678", "7-15"),
    ("0123569", "7-16"),
    ("0124569", "7-Z17"),
    ("0145679", "7-Z18"),
    ("0123679", "7-19"),
    ("0125679", "7-20"),
    ("0124589", "7-21"),
    ("0125689", "7-22"),
    ("0234579", "7-23"),
    ("0123579", "7-24"),
    ("0234679", "7-25"),
    ("0134579", "7-26"),
    ("0124579", "7-27"),
    ("0135679", "7-28"),
    ("0124679", "7-29"),
    ("0124689", "7-30"),
    ("0134679", "7-31"),
    ("0134689", "7-32"),
    ("012468A", "7-33"),
    ("013468A", "7-34"),
    ("013568A", "7-35"),
    ("0123568", "7-Z36"),
    ("0134578", "7-Z37"),
    ("0124578", "7-Z38"),
    ("01234567", "8-1"),
    ("01234568", "8-2"),
    ("01234569", "8-3"),
    ("01234578", "8-4"),
    ("01234678", "8-5"),
    ("01235678", "8-6"),
    ("01234589", "8-7"),
    ("01234789", "8-8"),
    ("01236789", "8-9"),
    ("02345679", "8-10"),
    ("01234579", "8-11"),
    ("01345679", "8-12"),
    ("01234679", "8-13"),
    ("01245679", "8-14"),
    ("01234689", "8-Z15"),
    ("01235789", "8-16"),
    ("01345689", "8-17"),
    ("01235689", "8-18"),
    ("01245689", "8-19"),
    ("01245789", "8-20"),
    ("0123468A", "8-21"),
    ("0123568A", "8-22"),
    ("0123578A", "8-23"),
    ("0124568A", "8-24"),
    ("0124678A", "8-25"),
    ("0124579A", "8-26"),
    ("0124578A", "8-27"),
    ("0134679A", "8-28"),
    ("01235679", "8-Z29"),
    ("012345678", "9-1"),
    ("012345679", "9-2"),
    ("012345689", "9-3"),
    ("012345789", "9-4"),
    ("012346789", "9-5"),
    ("01234568A", "9-6"),
    ("01234578A", "9-7"),
    ("01234678A", "9-8"),
    ("01235678A", "9-9"),
    ("01234679A", "9-10"),
    ("01235679A", "9-11"),
    ("01245689A", "9-12"),
];

/// Catalog name for a prime-form digit string, if catalogued.
pub(crate) fn lookup_name(prime: &str) -> Option<&'static str> {
    FORTE_TABLE
        .iter()
        .find(|(p, _)| *p == prime)
        .map(|(_, name)| *name)
}

/// Prime-form digit string for a catalog name. Reverse scan, O(table size).
pub(crate) fn lookup_prime(name: &str) -> Option<&'static str> {
    FORTE_TABLE
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(p, _)| *p)
}
