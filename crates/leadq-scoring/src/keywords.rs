//! Keyword-to-category tables for every scored dimension.
//!
//! All literals the feature extractor matches against live here, once. Bump
//! [`KEYWORD_TABLE_VERSION`] whenever an entry or value changes. Every
//! `ScoringResult` records the version it was scored with.
//!
//! Token tables (`&[(&str, T)]`) are matched by [`match_terms`]: text is
//! lowercased and split on non-alphanumeric characters, multi-word entries
//! are written as space-separated tokens (`"series a"`, `"pre seed"`).

pub const KEYWORD_TABLE_VERSION: &str = "2025.4";

/// Score substituted whenever a dimension has nothing to go on.
pub const NEUTRAL_SCORE: u8 = 50;

// ---------------------------------------------------------------------------
// Company size
// ---------------------------------------------------------------------------

/// Bracket labels, compared after lowercasing and removing whitespace.
pub(crate) const COMPANY_SIZE_BRACKETS: &[(&str, u8)] = &[
    ("10000+", 100),
    ("5000+", 100),
    ("1001+", 100),
    ("1000+", 100),
    ("501-1000", 90),
    ("201-500", 80),
    ("51-200", 60),
    ("11-50", 40),
    ("1-10", 20),
];

/// Minimum headcount for each score, highest first. The last rung must be 0.
pub(crate) const EMPLOYEE_COUNT_LADDER: &[(u32, u8)] = &[
    (1000, 100),
    (500, 90),
    (200, 80),
    (50, 60),
    (10, 40),
    (0, 20),
];

/// Headcount from which a company counts as an established player.
pub(crate) const ENTERPRISE_HEADCOUNT: u32 = 1000;

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

/// Substrings of the lowercased industry. The best-ranked match wins.
pub(crate) const INDUSTRY_RANKS: &[(&str, u8)] = &[
    ("saas", 100),
    ("software as a service", 100),
    ("fintech", 95),
    ("financial technology", 95),
    ("cybersecurity", 95),
    ("cyber security", 95),
    ("information security", 95),
    ("artificial intelligence", 90),
    ("machine learning", 90),
    ("cloud", 90),
    ("software", 90),
    ("technology", 85),
    ("data analytics", 85),
    ("healthtech", 85),
    ("analytics", 80),
    ("internet", 80),
    ("biotech", 80),
    ("healthcare", 75),
    ("e-commerce", 75),
    ("ecommerce", 75),
    ("financial services", 75),
    ("edtech", 70),
    ("telecommunications", 70),
    ("banking", 70),
    ("insurance", 65),
    ("consulting", 65),
    ("marketing", 65),
    ("media", 60),
    ("education", 55),
    ("logistics", 55),
    ("retail", 50),
    ("manufacturing", 45),
    ("real estate", 45),
    ("hospitality", 40),
    ("construction", 35),
    ("government", 35),
    ("non-profit", 30),
    ("nonprofit", 30),
    ("agriculture", 30),
    ("farming", 30),
];

pub(crate) const DEFAULT_INDUSTRY_SCORE: u8 = NEUTRAL_SCORE;

// ---------------------------------------------------------------------------
// Job title
// ---------------------------------------------------------------------------

/// Decision-making authority by title keyword, grouped by category.
pub(crate) const JOB_TITLE_AUTHORITY: &[(&str, u8)] = &[
    // C-level and founders
    ("ceo", 100),
    ("cto", 100),
    ("cfo", 100),
    ("coo", 100),
    ("cmo", 100),
    ("cio", 100),
    ("ciso", 100),
    ("cro", 100),
    ("cpo", 100),
    ("chief", 100),
    ("founder", 100),
    ("cofounder", 100),
    ("owner", 100),
    ("product owner", 55),
    ("president", 100),
    ("managing partner", 100),
    // VP
    ("vice president", 85),
    ("vp", 85),
    ("svp", 85),
    ("evp", 85),
    ("avp", 85),
    ("general manager", 85),
    // Director / head
    ("director", 75),
    ("head", 75),
    // Manager
    ("manager", 55),
    ("lead", 55),
    ("supervisor", 55),
    ("principal", 55),
    // Senior individual contributor
    ("senior", 45),
    ("sr", 45),
    ("staff", 45),
    ("architect", 45),
    // Individual contributor
    ("engineer", 35),
    ("developer", 35),
    ("analyst", 35),
    ("specialist", 35),
    ("associate", 35),
    ("consultant", 35),
    ("coordinator", 35),
    ("designer", 35),
    ("representative", 35),
    ("administrator", 35),
    ("scientist", 35),
    // Junior
    ("assistant", 25),
    ("junior", 25),
    ("jr", 25),
    // Students
    ("intern", 10),
    ("internship", 10),
    ("student", 10),
    ("trainee", 10),
    ("apprentice", 10),
];

pub(crate) const DEFAULT_TITLE_SCORE: u8 = 30;

/// Roles named after the person they support. A match decides the title
/// score outright, so the supported executive's title is not credited.
pub(crate) const SUPPORT_ROLES: &[(&str, u8)] = &[
    ("executive assistant", 25),
    ("personal assistant", 25),
    ("administrative assistant", 25),
    ("assistant to", 25),
];

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

pub(crate) const FUNDING_STAGES: &[(&str, u8)] = &[
    ("pre seed", 30),
    ("preseed", 30),
    ("bootstrapped", 35),
    ("self funded", 35),
    ("angel", 40),
    ("seed", 45),
    ("series a", 60),
    ("series b", 75),
    ("series c", 90),
    ("series d", 95),
    ("series e", 95),
    ("series f", 95),
    ("series g", 95),
    ("series h", 95),
    ("acquired", 70),
    ("ipo", 85),
    ("publicly traded", 85),
    ("public company", 85),
    ("nasdaq", 85),
    ("nyse", 85),
];

/// Funding terms that mark a publicly listed company.
pub(crate) const PUBLIC_MARKERS: &[(&str, ())] = &[
    ("ipo", ()),
    ("publicly traded", ()),
    ("public company", ()),
    ("nasdaq", ()),
    ("nyse", ()),
];

/// Minimum amount in dollars for each score, highest first.
pub(crate) const FUNDING_AMOUNT_LADDER: &[(f64, u8)] = &[
    (1_000_000_000.0, 100),
    (100_000_000.0, 95),
    (50_000_000.0, 90),
    (20_000_000.0, 80),
    (10_000_000.0, 70),
    (5_000_000.0, 60),
    (1_000_000.0, 50),
    (100_000.0, 40),
    (0.0, 30),
];

// ---------------------------------------------------------------------------
// Technology
// ---------------------------------------------------------------------------

pub(crate) const MODERN_TECH: &[&str] = &[
    "react",
    "react native",
    "vue",
    "vue.js",
    "svelte",
    "next.js",
    "nextjs",
    "typescript",
    "node.js",
    "nodejs",
    "kubernetes",
    "k8s",
    "docker",
    "terraform",
    "aws",
    "gcp",
    "azure",
    "graphql",
    "rust",
    "go",
    "golang",
    "python",
    "kotlin",
    "swift",
    "flutter",
    "elixir",
    "snowflake",
    "databricks",
    "kafka",
    "serverless",
    "lambda",
    "tailwind",
];

pub(crate) const LEGACY_TECH: &[&str] = &[
    "cobol",
    "fortran",
    "mainframe",
    "as400",
    "as/400",
    "jquery",
    "flash",
    "silverlight",
    "visual basic",
    "vb6",
    "vbscript",
    "classic asp",
    "coldfusion",
    "perl",
    "delphi",
    "foxpro",
    "lotus notes",
    "internet explorer",
];

pub(crate) const TECH_BASE_SCORE: i32 = 50;
pub(crate) const MODERN_TECH_BONUS: i32 = 10;
pub(crate) const LEGACY_TECH_PENALTY: i32 = 10;

// ---------------------------------------------------------------------------
// Engagement
// ---------------------------------------------------------------------------

pub(crate) const INTENT_HIGH: u8 = 85;
pub(crate) const INTENT_MEDIUM: u8 = 60;
pub(crate) const INTENT_LOW: u8 = 30;

/// Added to the stronger engagement signal when intent and activity both
/// reach the floor.
pub(crate) const ENGAGEMENT_AGREEMENT_BONUS: u8 = 5;
pub(crate) const ENGAGEMENT_AGREEMENT_FLOOR: u8 = 60;

/// Activity keywords, strongest buying signals first.
pub(crate) const ENGAGEMENT_ACTIVITY: &[(&str, u8)] = &[
    ("demo", 95),
    ("trial", 90),
    ("pricing", 90),
    ("contact sales", 90),
    ("quote", 85),
    ("proposal", 85),
    ("meeting", 80),
    ("webinar", 65),
    ("case study", 60),
    ("whitepaper", 55),
    ("ebook", 55),
    ("download", 50),
    ("newsletter", 30),
    ("blog", 30),
    ("unsubscribed", 10),
    ("unsubscribe", 10),
];

// ---------------------------------------------------------------------------
// Market position
// ---------------------------------------------------------------------------

/// Normalized full company names, compared after [`LEGAL_SUFFIXES`] are
/// stripped. A name merely containing one of these does not match.
pub(crate) const LARGE_COMPANIES: &[&str] = &[
    "google",
    "alphabet",
    "microsoft",
    "amazon",
    "amazon web services",
    "apple",
    "meta",
    "meta platforms",
    "facebook",
    "salesforce",
    "oracle",
    "ibm",
    "adobe",
    "sap",
    "intel",
    "cisco",
    "cisco systems",
    "nvidia",
    "netflix",
    "uber",
    "airbnb",
    "shopify",
    "stripe",
    "walmart",
    "jpmorgan",
    "jpmorgan chase",
    "jp morgan",
    "goldman sachs",
    "deloitte",
    "accenture",
];

/// Trailing legal-form tokens ignored when comparing company names.
pub(crate) const LEGAL_SUFFIXES: &[&str] = &[
    "inc",
    "incorporated",
    "llc",
    "ltd",
    "limited",
    "corp",
    "corporation",
    "co",
    "company",
    "plc",
    "gmbh",
    "ag",
    "se",
    "sa",
    "nv",
    "bv",
];

/// Hosting platforms whose subdomains suggest a hobby site rather than a business.
pub(crate) const BLOG_PLATFORMS: &[&str] = &[
    "wordpress.com",
    "blogspot.com",
    "medium.com",
    "substack.com",
    "tumblr.com",
    "wixsite.com",
    "weebly.com",
    "github.io",
    "squarespace.com",
    "carrd.co",
    "sites.google.com",
];

pub(crate) const MARKET_BASE_SCORE: i32 = 50;
pub(crate) const RECOGNIZED_COMPANY_BOOST: i32 = 30;
pub(crate) const ENTERPRISE_HEADCOUNT_BOOST: i32 = 10;
pub(crate) const PROFESSIONAL_DOMAIN_BOOST: i32 = 10;
pub(crate) const BLOG_DOMAIN_PENALTY: i32 = 10;

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// Signed adjustments applied once per matched term. Contraction phrases are
/// listed so that e.g. "hiring freeze" is consumed before "hiring" matches.
pub(crate) const GROWTH_SIGNALS: &[(&str, i32)] = &[
    ("hiring", 20),
    ("hired", 15),
    ("recruiting", 15),
    ("expanding", 15),
    ("expansion", 15),
    ("expanded", 15),
    ("new office", 15),
    ("new market", 15),
    ("record revenue", 15),
    ("launched", 10),
    ("launching", 10),
    ("growing", 10),
    ("growth", 10),
    ("hiring freeze", -20),
    ("restructuring", -20),
    ("layoffs", -25),
    ("layoff", -25),
    ("laid off", -25),
    ("downsizing", -25),
    ("bankruptcy", -40),
];

/// Activity terms that indicate a recent funding event.
pub(crate) const FUNDING_MENTIONS: &[(&str, ())] = &[
    ("raised", ()),
    ("funding", ()),
    ("funded", ()),
    ("investment", ()),
    ("series", ()),
];

pub(crate) const GROWTH_BASE_SCORE: i32 = 50;
pub(crate) const FUNDING_GROWTH_BOOST: i32 = 15;

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Lowercased alphanumeric tokens of `text`.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns every table entry found in `text`, in table order.
///
/// Multi-word entries are matched first and their tokens consumed, so a
/// phrase like `"vice president"` never also counts as `"president"`. Each
/// entry matches at most once.
pub(crate) fn match_terms<T: Copy>(
    text: &str,
    table: &[(&'static str, T)],
) -> Vec<(&'static str, T)> {
    let mut tokens: Vec<Option<String>> = tokenize(text).into_iter().map(Some).collect();
    let mut hits: Vec<(usize, &'static str, T)> = Vec::new();

    for (idx, &(term, value)) in table.iter().enumerate() {
        let words: Vec<&str> = term.split(' ').collect();
        if words.len() < 2 || tokens.len() < words.len() {
            continue;
        }
        let found = (0..=tokens.len() - words.len()).find(|&start| {
            words
                .iter()
                .enumerate()
                .all(|(offset, word)| tokens[start + offset].as_deref() == Some(*word))
        });
        if let Some(start) = found {
            for slot in &mut tokens[start..start + words.len()] {
                *slot = None;
            }
            hits.push((idx, term, value));
        }
    }

    for (idx, &(term, value)) in table.iter().enumerate() {
        if term.contains(' ') {
            continue;
        }
        if tokens.iter().any(|t| t.as_deref() == Some(term)) {
            hits.push((idx, term, value));
        }
    }

    hits.sort_by_key(|&(idx, _, _)| idx);
    hits.into_iter().map(|(_, term, value)| (term, value)).collect()
}

/// Whether `name` is one of [`LARGE_COMPANIES`] once legal suffixes are
/// dropped.
pub(crate) fn is_large_company(name: &str) -> bool {
    let mut tokens = tokenize(name);
    while tokens.last().is_some_and(|t| LEGAL_SUFFIXES.contains(&t.as_str())) {
        tokens.pop();
    }
    let normalized = tokens.join(" ");
    LARGE_COMPANIES.contains(&normalized.as_str())
}

/// Whether a single tech-stack entry names `keyword`.
///
/// Matches the whole entry (`"Node.js"`), one of its whitespace-separated
/// words (`"AWS Lambda"`), or a multi-word keyword inside it
/// (`"Visual Basic 6"`).
pub(crate) fn tech_entry_matches(entry: &str, keyword: &str) -> bool {
    entry == keyword
        || entry.split_whitespace().any(|word| word == keyword)
        || (keyword.contains(' ') && entry.contains(keyword))
}
