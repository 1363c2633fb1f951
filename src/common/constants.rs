/// Official base tags, used as the default catalog and base selection
pub const OFFICIAL_BASES: &[&str] = &[
    "_base_campanhas_antigas",
    "_base_produtividade_inteligente",
    "_base_estrategias_digitais",
    "_base_liberacao_oratoria",
    "_base_intensivo_bia",
    "_base_gc_conquer_talks",
    "_base_liberacao_sinal_plus",
    "_base_conquer_carreiras",
    "_base_gp_minicurso",
    "_base_campanhas_varejo",
    "_base_lib_de_ia",
    "_base_liberacao_apresentacoes_que_conquistam",
    "_base_liberacao_lideranca",
    "_base_inteligencia_emocional",
    "_base_liberacao_foco",
    "_base_mba_neurociencia",
    "_base_liberacao_em_vendas",
    "_base_desengajadas",
];

/// Query parameters rewritten for every generated link
pub const CAMPAIGN_PARAM: &str = "utm_campaign";
pub const CONTENT_PARAM: &str = "utm_content";

/// Accepted scheme prefixes for the master link
pub const ACCEPTED_SCHEMES: &[&str] = &["http://", "https://"];

/// Upper bounds for the requested quantity
pub const MAX_QUANTITY_CYCLIC: u32 = 200;
pub const MAX_QUANTITY_MULTIPLICATIVE: u32 = 100;
pub const DEFAULT_QUANTITY: u32 = 40;

/// Identifier used for base-link records
pub const ORIGINAL_IDENTIFIER: &str = "Original";

/// Export format
pub const EXPORT_FILE_PREFIX: &str = "Links_Growth_";
pub const EXPORT_DELIMITER: u8 = b';';
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Table columns, in display order
pub const TABLE_HEADERS: [&str; 4] = ["Tipo", "Identificador", "Base", "Link Final"];
pub const GROUP_HEADER: &str = "Grupo";
