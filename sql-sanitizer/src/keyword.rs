//! The closed set of SQL keywords the tokenizer recognizes, their logical
//! categories, and the follow-on chains that restrict which keyword can
//! legally appear next (the small DAG described in the crate's module docs).

use bitflags::bitflags;

/// Hard cap on the length of a produced [`crate::SqlStatementInfo::summary`].
pub const MAX_SUMMARY_LENGTH: usize = 255;

/// The logical role of a keyword token.
///
/// `Unknown` is the initial state of `prev_keyword` before any keyword has
/// matched, and also the state a chain resets to once a non-matching token
/// is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    Unknown,
    Select,
    Insert,
    Update,
    Delete,
    From,
    Into,
    Join,
    On,
    Create,
    Alter,
    Drop,
    Table,
    Index,
    Procedure,
    View,
    Database,
    Trigger,
    Schema,
    Function,
    User,
    Role,
    Sequence,
    Unique,
    Clustered,
    NonClustered,
    Distinct,
}

bitflags! {
    /// A set of [`Category`] values packed into a single word.
    ///
    /// Follow-on sets and `capture_in_summary` predicates are expressed as
    /// membership tests against one of these masks, which turns "is this
    /// category a legal successor" into a single `u32` AND on the hot path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CategoryMask: u32 {
        const UNKNOWN       = 1 << 0;
        const SELECT        = 1 << 1;
        const INSERT        = 1 << 2;
        const UPDATE        = 1 << 3;
        const DELETE        = 1 << 4;
        const FROM          = 1 << 5;
        const INTO          = 1 << 6;
        const JOIN          = 1 << 7;
        const ON            = 1 << 8;
        const CREATE        = 1 << 9;
        const ALTER         = 1 << 10;
        const DROP          = 1 << 11;
        const TABLE         = 1 << 12;
        const INDEX         = 1 << 13;
        const PROCEDURE     = 1 << 14;
        const VIEW          = 1 << 15;
        const DATABASE      = 1 << 16;
        const TRIGGER       = 1 << 17;
        const SCHEMA        = 1 << 18;
        const FUNCTION      = 1 << 19;
        const USER          = 1 << 20;
        const ROLE          = 1 << 21;
        const SEQUENCE      = 1 << 22;
        const UNIQUE        = 1 << 23;
        const CLUSTERED     = 1 << 24;
        const NONCLUSTERED  = 1 << 25;
        const DISTINCT      = 1 << 26;

        const NONE = 0;
    }
}

impl Category {
    const fn mask(self) -> CategoryMask {
        match self {
            Category::Unknown => CategoryMask::UNKNOWN,
            Category::Select => CategoryMask::SELECT,
            Category::Insert => CategoryMask::INSERT,
            Category::Update => CategoryMask::UPDATE,
            Category::Delete => CategoryMask::DELETE,
            Category::From => CategoryMask::FROM,
            Category::Into => CategoryMask::INTO,
            Category::Join => CategoryMask::JOIN,
            Category::On => CategoryMask::ON,
            Category::Create => CategoryMask::CREATE,
            Category::Alter => CategoryMask::ALTER,
            Category::Drop => CategoryMask::DROP,
            Category::Table => CategoryMask::TABLE,
            Category::Index => CategoryMask::INDEX,
            Category::Procedure => CategoryMask::PROCEDURE,
            Category::View => CategoryMask::VIEW,
            Category::Database => CategoryMask::DATABASE,
            Category::Trigger => CategoryMask::TRIGGER,
            Category::Schema => CategoryMask::SCHEMA,
            Category::Function => CategoryMask::FUNCTION,
            Category::User => CategoryMask::USER,
            Category::Role => CategoryMask::ROLE,
            Category::Sequence => CategoryMask::SEQUENCE,
            Category::Unique => CategoryMask::UNIQUE,
            Category::Clustered => CategoryMask::CLUSTERED,
            Category::NonClustered => CategoryMask::NONCLUSTERED,
            Category::Distinct => CategoryMask::DISTINCT,
        }
    }

    /// Whether `self` is a member of `set`.
    pub const fn in_set(self, set: CategoryMask) -> bool {
        (self.mask().bits() & set.bits()) != 0
    }
}

/// A single entry in the static keyword table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    /// Canonical (upper-case) spelling, used only for matching; the
    /// sanitized output always copies the user's original casing.
    pub text: &'static str,
    pub category: Category,
    /// Categories that may legally follow this keyword (§3's DAG).
    pub follow_on_set: CategoryMask,
    /// Whether matching this keyword should arm `capture_next_token_in_summary`.
    pub followed_by_identifier: bool,
    /// Previous-category masks for which this keyword contributes to the
    /// summary (the §4.4 capture matrix). `CategoryMask::NONE` means never.
    capture_when: CategoryMask,
}

impl KeywordInfo {
    /// The §4.4 capture predicate: does this keyword enter the summary given
    /// the category of the previously matched keyword?
    pub const fn capture_in_summary(&self, previous: Category) -> bool {
        previous.in_set(self.capture_when)
    }
}

macro_rules! kw {
    ($text:expr, $category:expr, $follow_on:expr, $followed_by_identifier:expr, $capture_when:expr) => {
        KeywordInfo {
            text: $text,
            category: $category,
            follow_on_set: $follow_on,
            followed_by_identifier: $followed_by_identifier,
            capture_when: $capture_when,
        }
    };
}

/// The closed, static keyword table. Order matters only within a shared
/// candidate set, where it determines match priority for ambiguous
/// prefixes (none of the entries below are prefixes of one another, so in
/// practice order is cosmetic).
pub static KEYWORDS: &[KeywordInfo] = &[
    kw!(
        "SELECT",
        Category::Select,
        CategoryMask::from_bits_truncate(CategoryMask::DISTINCT.bits() | CategoryMask::FROM.bits()),
        false,
        CategoryMask::from_bits_truncate(CategoryMask::UNKNOWN.bits() | CategoryMask::SELECT.bits())
    ),
    kw!("DISTINCT", Category::Distinct, CategoryMask::FROM, false, CategoryMask::SELECT),
    kw!("FROM", Category::From, CategoryMask::JOIN, true, CategoryMask::NONE),
    kw!("JOIN", Category::Join, CategoryMask::NONE, true, CategoryMask::NONE),
    kw!("INSERT", Category::Insert, CategoryMask::INTO, false, CategoryMask::UNKNOWN),
    kw!("INTO", Category::Into, CategoryMask::NONE, true, CategoryMask::NONE),
    kw!("UPDATE", Category::Update, CategoryMask::NONE, true, CategoryMask::UNKNOWN),
    kw!("DELETE", Category::Delete, CategoryMask::FROM, false, CategoryMask::UNKNOWN),
    kw!("ON", Category::On, CategoryMask::NONE, true, CategoryMask::NONE),
    kw!("CREATE", Category::Create, DDL_FOLLOW_ON, false, CategoryMask::UNKNOWN),
    kw!("ALTER", Category::Alter, DDL_FOLLOW_ON, false, CategoryMask::UNKNOWN),
    kw!("DROP", Category::Drop, DDL_FOLLOW_ON, false, CategoryMask::UNKNOWN),
    kw!("TABLE", Category::Table, CategoryMask::NONE, true, DDL_PARENT),
    kw!("INDEX", Category::Index, CategoryMask::ON, true, INDEX_CAPTURE_PARENT),
    kw!("VIEW", Category::View, CategoryMask::NONE, true, DDL_PARENT),
    kw!("PROCEDURE", Category::Procedure, CategoryMask::NONE, true, DDL_PARENT),
    kw!("TRIGGER", Category::Trigger, CategoryMask::NONE, true, DDL_PARENT),
    kw!("DATABASE", Category::Database, CategoryMask::NONE, true, DDL_PARENT),
    kw!("SCHEMA", Category::Schema, CategoryMask::NONE, true, DDL_PARENT),
    kw!("FUNCTION", Category::Function, CategoryMask::NONE, true, DDL_PARENT),
    kw!("USER", Category::User, CategoryMask::NONE, true, DDL_PARENT),
    kw!("ROLE", Category::Role, CategoryMask::NONE, true, DDL_PARENT),
    kw!("SEQUENCE", Category::Sequence, CategoryMask::NONE, true, DDL_PARENT),
    kw!(
        "UNIQUE",
        Category::Unique,
        CategoryMask::from_bits_truncate(
            CategoryMask::INDEX.bits() | CategoryMask::CLUSTERED.bits() | CategoryMask::NONCLUSTERED.bits()
        ),
        false,
        DDL_PARENT
    ),
    kw!("CLUSTERED", Category::Clustered, CategoryMask::INDEX, false, UNIQUE_OR_DDL_PARENT),
    kw!("NONCLUSTERED", Category::NonClustered, CategoryMask::INDEX, false, UNIQUE_OR_DDL_PARENT),
];

/// Previous-category mask shared by every DDL object/option keyword
/// (`TABLE`, `INDEX`, `UNIQUE`, …): captured only directly after
/// `CREATE`/`ALTER`/`DROP`.
const DDL_PARENT: CategoryMask = CategoryMask::from_bits_truncate(
    CategoryMask::CREATE.bits() | CategoryMask::ALTER.bits() | CategoryMask::DROP.bits(),
);

/// Follow-on set shared by `CREATE`/`ALTER`/`DROP`.
const DDL_FOLLOW_ON: CategoryMask = CategoryMask::from_bits_truncate(
    CategoryMask::TABLE.bits()
        | CategoryMask::INDEX.bits()
        | CategoryMask::VIEW.bits()
        | CategoryMask::PROCEDURE.bits()
        | CategoryMask::TRIGGER.bits()
        | CategoryMask::DATABASE.bits()
        | CategoryMask::SCHEMA.bits()
        | CategoryMask::FUNCTION.bits()
        | CategoryMask::USER.bits()
        | CategoryMask::ROLE.bits()
        | CategoryMask::SEQUENCE.bits()
        | CategoryMask::UNIQUE.bits()
        | CategoryMask::CLUSTERED.bits()
        | CategoryMask::NONCLUSTERED.bits(),
);

/// Previous-category mask for `CLUSTERED`/`NONCLUSTERED`: captured after
/// `CREATE`/`ALTER`/`DROP` directly (`CREATE CLUSTERED INDEX`), or after
/// `UNIQUE` in the `CREATE UNIQUE CLUSTERED INDEX` chain.
const UNIQUE_OR_DDL_PARENT: CategoryMask =
    CategoryMask::from_bits_truncate(DDL_PARENT.bits() | CategoryMask::UNIQUE.bits());

/// Previous-category mask for `INDEX`: captured directly after
/// `CREATE`/`ALTER`/`DROP`, or after `UNIQUE`/`CLUSTERED`/`NONCLUSTERED`
/// in a `CREATE UNIQUE CLUSTERED INDEX` chain.
const INDEX_CAPTURE_PARENT: CategoryMask = CategoryMask::from_bits_truncate(
    DDL_PARENT.bits() | CategoryMask::UNIQUE.bits() | CategoryMask::CLUSTERED.bits() | CategoryMask::NONCLUSTERED.bits(),
);

/// Previous-category mask naming exactly the seven top-level statement
/// verbs (§4.4 step 3, third bullet).
const TOP_LEVEL_VERB_SET: CategoryMask = CategoryMask::from_bits_truncate(
    CategoryMask::SELECT.bits()
        | CategoryMask::INSERT.bits()
        | CategoryMask::UPDATE.bits()
        | CategoryMask::DELETE.bits()
        | CategoryMask::CREATE.bits()
        | CategoryMask::ALTER.bits()
        | CategoryMask::DROP.bits(),
);

/// The top-level statement verbs tried when there is no active chain
/// (§4.4 step 3, third bullet).
pub fn top_level_verbs() -> impl Iterator<Item = &'static KeywordInfo> {
    candidates_in(TOP_LEVEL_VERB_SET)
}

/// Looks up the keyword whose category is `category`. Every category named
/// by a follow-on mask has exactly one entry in [`KEYWORDS`], so this never
/// returns `None` for a category produced by this table.
pub fn by_category(category: Category) -> Option<&'static KeywordInfo> {
    KEYWORDS.iter().find(|k| k.category == category)
}

/// Returns the keywords forming `set`, in table order, suitable as a
/// candidate set for matching (§4.4 step 3, second bullet).
pub fn candidates_in(set: CategoryMask) -> impl Iterator<Item = &'static KeywordInfo> {
    KEYWORDS.iter().filter(move |k| k.category.in_set(set))
}

/// Sole keyword tried for the sub-query rule (§4.4 step 3, first bullet):
/// immediately after an opening parenthesis, only `SELECT` is a legal
/// keyword match.
pub fn subquery_candidate() -> &'static KeywordInfo {
    &KEYWORDS[0]
}
