// ABOUTME: Declarative schema for wallet authentication settings fields
// ABOUTME: Field keys, widget kinds, option sets, and defaults in one table

/// Widget kind of a settings field. Determines how raw submitted values
/// are interpreted during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single choice out of the declared options.
    Select,
    /// Boolean flag; truthy/falsy submissions are coerced.
    Checkbox,
    /// Integer with inclusive bounds. Out-of-range values are rejected,
    /// never clamped.
    Number { min: i64, max: i64 },
    /// Multi-choice; submitted as a candidate-to-flag mapping, persisted
    /// as the checked subset in option declaration order.
    Checkboxes,
    /// Free-form text, non-empty after trimming.
    TextField,
}

/// One settings field: key, widget kind, display metadata, and domain.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub description: &'static str,
    /// `(value, label)` pairs for Select/Checkboxes fields. Declaration
    /// order here is the canonical order of persisted multi-values.
    pub options: &'static [(&'static str, &'static str)],
    pub required: bool,
    /// Unit hint shown after the input, if any.
    pub suffix: Option<&'static str>,
}

pub const NETWORK: &str = "network";
pub const ENABLE_AUTO_CONNECT: &str = "enable_auto_connect";
pub const NONCE_LIFETIME: &str = "nonce_lifetime";
pub const AUTHENTICATION_METHODS: &str = "authentication_methods";
pub const ALLOWED_SOCIALS: &str = "allowed_socials";
pub const REDIRECT_ON_SUCCESS: &str = "redirect_on_success";

/// The full settings schema, in display order. Immutable for the life of
/// the process.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: NETWORK,
        kind: FieldKind::Select,
        label: "Blockchain network",
        description: "Select the blockchain network to use for wallet authentication.",
        options: &[
            ("mainnet", "Ethereum Mainnet"),
            ("sepolia", "Sepolia Testnet"),
            ("polygon", "Polygon"),
            ("bsc", "Binance Smart Chain"),
            ("arbitrum", "Arbitrum"),
            ("optimism", "Optimism"),
        ],
        required: true,
        suffix: None,
    },
    FieldSpec {
        key: ENABLE_AUTO_CONNECT,
        kind: FieldKind::Checkbox,
        label: "Enable auto-connect",
        description: "Automatically attempt to connect the wallet when the block is loaded.",
        options: &[],
        required: false,
        suffix: None,
    },
    FieldSpec {
        key: NONCE_LIFETIME,
        kind: FieldKind::Number { min: 60, max: 3600 },
        label: "Authentication timeout",
        description: "How long the authentication challenge is valid in seconds. Default is 300 (5 minutes).",
        options: &[],
        required: true,
        suffix: Some("seconds"),
    },
    FieldSpec {
        key: AUTHENTICATION_METHODS,
        kind: FieldKind::Checkboxes,
        label: "Authentication methods",
        description: "Select which authentication methods to display.",
        options: &[("email", "Email"), ("social", "Social")],
        required: true,
        suffix: None,
    },
    FieldSpec {
        key: ALLOWED_SOCIALS,
        kind: FieldKind::Checkboxes,
        label: "Allowed social providers",
        description: "Select which social providers to allow.",
        options: &[
            ("google", "Google"),
            ("twitter", "Twitter/X"),
            ("discord", "Discord"),
            ("bluesky", "Bluesky"),
        ],
        required: true,
        suffix: None,
    },
    FieldSpec {
        key: REDIRECT_ON_SUCCESS,
        kind: FieldKind::TextField,
        label: "Redirect path after login",
        description: "The internal path to redirect to after successful authentication (e.g., /user or /dashboard).",
        options: &[],
        required: true,
        suffix: None,
    },
];

/// Look up a field by its key.
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}
