//! Form schema descriptors for the intake wizard and submission endpoints.
//!
//! Both brand variants (CodeCraft Labs project requests, Academic Assist
//! assignment requests) share one wizard and one backend handler; everything
//! variant-specific lives in a static [`FormSchema`]: which fields exist, the
//! wizard step that collects each one, required flags, defaults, multi-select
//! options and the display-label tables used in notifications.

mod draft;

pub use draft::DraftRecord;

/// Number of wizard steps in every built-in form
pub const STEP_COUNT: u8 = 5;

/// One scalar field of a form
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name, also the key in the draft record (e.g. "projectTitle")
    pub name: &'static str,
    /// Wizard step that collects this field, 1-based
    pub step: u8,
    /// Whether the wizard blocks forward navigation while this field is empty
    pub required: bool,
    /// Whether the backend rejects a submission missing this field
    pub server_required: bool,
    /// Value applied when the field was never set / absent from the payload
    pub default: &'static str,
}

/// A flat multi-select field (set of tags)
#[derive(Debug, Clone, Copy)]
pub struct FacetSpec {
    pub name: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

/// A grouped multi-select field (category name -> set of option tags)
#[derive(Debug, Clone, Copy)]
pub struct StackSpec {
    pub name: &'static str,
    pub categories: &'static [(&'static str, &'static [&'static str])],
}

/// Which built-in form a schema describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    ProjectRequest,
    AssignmentRequest,
}

/// Static description of one form variant.
///
/// The same descriptor drives the wizard's step gating, the draft record's
/// field set and defaults, the backend's normalization and validation, and
/// the notification formatter's label remapping.
#[derive(Debug)]
pub struct FormSchema {
    pub kind: FormKind,
    pub title: &'static str,
    /// Request path the gateway posts to
    pub endpoint: &'static str,
    /// Storage collection name for persisted submissions
    pub collection: &'static str,
    /// Confirmation message returned on accepted submissions
    pub confirmation: &'static str,
    /// Display names of the wizard steps, in order
    pub steps: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    pub expertise: FacetSpec,
    pub stack: StackSpec,
    /// Field holding the selected classification code
    pub classification_field: &'static str,
    /// Classification code -> display name
    pub classification_labels: &'static [(&'static str, &'static str)],
    /// Field holding the budget / academic-level code
    pub tier_field: &'static str,
    /// Tier code -> display name
    pub tier_labels: &'static [(&'static str, &'static str)],
    /// Field holding the timeline / deadline choice
    pub schedule_field: &'static str,
}

impl FormSchema {
    /// Look up a scalar field by wire name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields the wizard requires before leaving the given step
    pub fn required_for_step(&self, step: u8) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(move |f| f.step == step && f.required)
    }

    /// Fields the backend rejects a submission without
    pub fn server_required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.server_required)
    }

    /// Display name for a classification code; unknown codes pass through
    pub fn classification_label<'a>(&self, code: &'a str) -> &'a str {
        lookup_label(self.classification_labels, code)
    }

    /// Display name for a budget / academic-level code; unknown codes pass through
    pub fn tier_label<'a>(&self, code: &'a str) -> &'a str {
        lookup_label(self.tier_labels, code)
    }

    /// All built-in form schemas
    pub fn all() -> &'static [&'static FormSchema] {
        &BUILTIN_SCHEMAS
    }
}

fn lookup_label<'a>(table: &'static [(&'static str, &'static str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |(_, label)| *label)
}

static BUILTIN_SCHEMAS: [&FormSchema; 2] = [&PROJECT_REQUEST, &ASSIGNMENT_REQUEST];

/// The CodeCraft Labs project-request form
pub fn project_request() -> &'static FormSchema {
    &PROJECT_REQUEST
}

/// The Academic Assist assignment-request form
pub fn assignment_request() -> &'static FormSchema {
    &ASSIGNMENT_REQUEST
}

static PROJECT_REQUEST: FormSchema = FormSchema {
    kind: FormKind::ProjectRequest,
    title: "Project Request",
    endpoint: "/api/project-request",
    collection: "project-requests",
    confirmation: "Your project request has been submitted! We'll review your \
                   requirements and get back to you within 24 hours.",
    steps: &[
        "Service Type",
        "Project Details",
        "Technical Info",
        "Timeline & Budget",
        "Contact Info",
    ],
    fields: &[
        field("serviceType", 1, REQUIRED, ""),
        field("projectTitle", 2, REQUIRED, ""),
        field("projectDescription", 2, REQUIRED, ""),
        field("currentState", 2, OPTIONAL, ""),
        field("desiredOutcome", 2, OPTIONAL, ""),
        field("hasExistingCode", 2, OPTIONAL, ""),
        field("repoAccess", 2, OPTIONAL, ""),
        field("timeline", 4, WIZARD_ONLY, ""),
        field("budget", 4, WIZARD_ONLY, ""),
        field("startDate", 4, OPTIONAL, ""),
        field("name", 5, REQUIRED, ""),
        field("email", 5, REQUIRED, ""),
        field("company", 5, OPTIONAL, ""),
        field("role", 5, OPTIONAL, ""),
        field("phone", 5, OPTIONAL, ""),
        field("preferredContact", 5, OPTIONAL, "email"),
        field("additionalNotes", 5, OPTIONAL, ""),
    ],
    expertise: FacetSpec {
        name: "techExpertise",
        options: &[
            ("ai-ml", "AI & Machine Learning"),
            ("fullstack", "Full-Stack Development"),
            ("cloud", "Cloud & DevOps"),
            ("data", "Data Engineering"),
            ("security", "Security"),
            ("performance", "Performance"),
        ],
    },
    stack: StackSpec {
        name: "currentStack",
        categories: &[
            (
                "Frontend",
                &["React", "Next.js", "Vue", "Angular", "Svelte", "Other"],
            ),
            (
                "Backend",
                &["Node.js", "Python", "Go", "Java", ".NET", "Other"],
            ),
            (
                "Database",
                &["PostgreSQL", "MongoDB", "MySQL", "Redis", "Supabase", "Other"],
            ),
            (
                "Cloud",
                &["AWS", "Vercel", "GCP", "Azure", "DigitalOcean", "Other"],
            ),
        ],
    },
    classification_field: "serviceType",
    classification_labels: &[
        ("codebase-fix", "Codebase Fixes & Optimization"),
        ("demo-to-production", "Demo to Production"),
        ("consulting", "Technical Consulting"),
        ("full-development", "Full Development"),
    ],
    tier_field: "budget",
    tier_labels: &[
        ("under-1k", "Under $1,000"),
        ("1k-5k", "$1,000 - $5,000"),
        ("under-5k", "Under $5,000"),
        ("5k-15k", "$5,000 - $15,000"),
        ("15k-50k", "$15,000 - $50,000"),
        ("50k-100k", "$50,000 - $100,000"),
        ("100k-plus", "$100,000+"),
        ("discuss", "Let's Discuss"),
    ],
    schedule_field: "timeline",
};

static ASSIGNMENT_REQUEST: FormSchema = FormSchema {
    kind: FormKind::AssignmentRequest,
    title: "Assignment Request",
    endpoint: "/api/assignment-request",
    collection: "assignment-requests",
    confirmation: "Your assignment request has been submitted! We'll match you \
                   with an academic expert and get back to you within 24 hours.",
    steps: &[
        "Assignment Type",
        "Assignment Details",
        "Academic Info",
        "Deadline & Level",
        "Contact Info",
    ],
    fields: &[
        field("assignmentType", 1, REQUIRED, ""),
        field("assignmentTitle", 2, REQUIRED, ""),
        field("assignmentDescription", 2, REQUIRED, ""),
        field("subjectArea", 2, OPTIONAL, "Not specified"),
        field("specificRequirements", 2, OPTIONAL, ""),
        field("hasExistingWork", 2, OPTIONAL, ""),
        field("citationStyle", 3, OPTIONAL, "Not specified"),
        field("deadline", 4, WIZARD_ONLY, ""),
        field("academicLevel", 4, WIZARD_ONLY, ""),
        field("urgencyLevel", 4, OPTIONAL, "standard"),
        field("submissionDate", 4, OPTIONAL, ""),
        field("name", 5, REQUIRED, ""),
        field("email", 5, REQUIRED, ""),
        field("university", 5, OPTIONAL, ""),
        field("phone", 5, OPTIONAL, ""),
        field("preferredContact", 5, OPTIONAL, "email"),
        field("additionalNotes", 5, OPTIONAL, ""),
    ],
    expertise: FacetSpec {
        name: "academicExpertise",
        options: &[
            ("research-methods", "Research Methods"),
            ("data-analysis", "Data Analysis & Statistics"),
            ("literature-review", "Literature Review"),
            ("stem-subjects", "STEM Subjects"),
            ("humanities", "Humanities & Social Sciences"),
            ("editing", "Editing & Proofreading"),
        ],
    },
    stack: StackSpec {
        name: "requiredSources",
        categories: &[
            (
                "Sources",
                &[
                    "Peer-reviewed journals",
                    "Books",
                    "Primary sources",
                    "Datasets",
                    "News media",
                    "Other",
                ],
            ),
            (
                "Citation Style",
                &["APA", "MLA", "Chicago", "Harvard", "IEEE", "Other"],
            ),
        ],
    },
    classification_field: "assignmentType",
    classification_labels: &[
        ("essay", "Essay Writing"),
        ("research-paper", "Research Paper"),
        ("dissertation", "Dissertation & Thesis"),
        ("coursework", "Coursework & Assignments"),
        ("problem-set", "Problem Sets & STEM Work"),
    ],
    tier_field: "academicLevel",
    tier_labels: &[
        ("high-school", "High School"),
        ("undergraduate", "Undergraduate"),
        ("masters", "Master's"),
        ("phd", "PhD / Doctoral"),
    ],
    schedule_field: "deadline",
};

// Required on both sides; required by the wizard but not re-checked by the
// backend (the step-4 logistics fields); optional everywhere.
const REQUIRED: (bool, bool) = (true, true);
const WIZARD_ONLY: (bool, bool) = (true, false);
const OPTIONAL: (bool, bool) = (false, false);

const fn field(
    name: &'static str,
    step: u8,
    flags: (bool, bool),
    default: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        step,
        required: flags.0,
        server_required: flags.1,
        default,
    }
}
