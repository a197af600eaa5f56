//! Dark cinema theme for CineMax
//!
//! Color palette and the stylesheet inlined into every page.

/// Slate-and-ember color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #020617 (slate-950)
    pub const BACKGROUND: &'static str = "#020617";

    /// Panels and cards: #1e293b (slate-800)
    pub const SURFACE: &'static str = "#1e293b";

    /// Borders: #334155 (slate-700)
    pub const BORDER: &'static str = "#334155";

    /// Primary: #ef4444 (red-500)
    pub const PRIMARY: &'static str = "#ef4444";

    /// Secondary: #f97316 (orange-500)
    pub const SECONDARY: &'static str = "#f97316";

    /// Star accent: #fde047 (yellow-300)
    pub const ACCENT: &'static str = "#fde047";

    /// Text: #e2e8f0 (slate-200)
    pub const TEXT: &'static str = "#e2e8f0";

    /// Muted text: #94a3b8 (slate-400)
    pub const DIM: &'static str = "#94a3b8";

    /// Error text: #fca5a5 (red-300)
    pub const ERROR: &'static str = "#fca5a5";

    /// Stylesheet for the whole site
    pub fn stylesheet() -> String {
        format!(
            r#"
*{{box-sizing:border-box}}
body{{margin:0;background:{bg};color:{text};font-family:system-ui,-apple-system,"Segoe UI",sans-serif}}
a{{color:inherit;text-decoration:none}}
.container{{max-width:80rem;margin:0 auto;padding:0 1.5rem}}
.navbar{{position:sticky;top:0;z-index:50;background:{bg}e6;border-bottom:1px solid {surface}}}
.navbar .container{{display:flex;justify-content:space-between;align-items:center;height:4rem}}
.brand{{font-weight:700;font-size:1.5rem;background:linear-gradient(90deg,{primary},{secondary});-webkit-background-clip:text;background-clip:text;color:transparent}}
.nav-links a{{margin-left:2rem;color:{dim}}}
.nav-links a:hover{{color:{primary}}}
.hero{{padding:5rem 0;text-align:center;background:linear-gradient(135deg,#0f172a,#450a0a33,#0f172a)}}
.hero h1{{font-size:3.5rem;margin:0 0 1rem;background:linear-gradient(90deg,#f87171,#fb923c,#f87171);-webkit-background-clip:text;background-clip:text;color:transparent}}
.hero p{{color:{dim};font-size:1.2rem}}
.section{{padding:4rem 0}}
.section h2{{font-size:2.25rem;margin:0 0 .5rem}}
.bar{{height:4px;width:5rem;background:linear-gradient(90deg,{primary},{secondary});border-radius:2px}}
.status{{color:{dim};margin-top:.75rem}}
.grid{{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fill,minmax(15rem,1fr));margin-top:3rem}}
.card{{display:block;height:100%;border:1px solid {border};border-radius:.5rem;overflow:hidden;background:linear-gradient({surface},#0f172a)}}
.card:hover{{border-color:{primary}}}
.card .poster{{position:relative;height:20rem}}
.card .poster img{{width:100%;height:100%;object-fit:cover}}
.badge{{position:absolute;top:.75rem;right:.75rem;width:3rem;height:3rem;border-radius:50%;background:{primary};display:flex;align-items:center;justify-content:center;font-weight:700}}
.card .body{{padding:1.25rem}}
.card h3{{margin:0 0 .5rem}}
.card .year{{color:{dim};font-size:.875rem}}
.card .overview{{font-size:.875rem;display:-webkit-box;-webkit-line-clamp:3;-webkit-box-orient:vertical;overflow:hidden}}
.button{{display:inline-block;width:100%;text-align:center;padding:.5rem 1.5rem;border:0;border-radius:.5rem;color:#fff;font-weight:600;background:linear-gradient(90deg,{primary},{secondary});cursor:pointer}}
.button.disabled{{background:#334155;color:#475569;pointer-events:none}}
.skeleton div{{background:{surface};border-radius:.5rem;animation:pulse 2s infinite}}
.skeleton .block{{height:20rem;margin-bottom:1rem}}
.skeleton .line{{height:1rem;margin-bottom:.5rem}}
@keyframes pulse{{50%{{opacity:.5}}}}
.error-banner{{background:#ef44441a;border:1px solid #ef44444d;border-radius:.5rem;padding:1.5rem;text-align:center;color:{error};margin-top:2rem}}
.empty{{text-align:center;padding:5rem 0;color:{dim}}}
.search-bar{{padding:2rem 0;border-bottom:1px solid {surface}}}
.search-form{{position:relative}}
.search-form input{{width:100%;padding:.75rem 1rem;background:{surface};border:1px solid {border};border-radius:.5rem;color:#fff;font-size:1rem}}
.search-form button{{position:absolute;right:.5rem;top:50%;transform:translateY(-50%);width:auto}}
.pagination{{display:flex;justify-content:center;align-items:center;gap:1rem;margin-top:3rem}}
.pagination .button{{width:auto}}
.spinner{{display:inline-block;width:3rem;height:3rem;border-radius:50%;border-bottom:2px solid {primary};animation:spin 1s linear infinite}}
@keyframes spin{{to{{transform:rotate(360deg)}}}}
.center{{min-height:60vh;display:flex;align-items:center;justify-content:center;flex-direction:column;color:{dim}}}
.backdrop{{position:relative;height:31rem;overflow:hidden}}
.backdrop img{{width:100%;height:100%;object-fit:cover}}
.backdrop::after{{content:"";position:absolute;inset:0;background:linear-gradient(transparent,transparent,{bg})}}
.detail{{display:grid;grid-template-columns:1fr 3fr;gap:2rem;margin-top:-8rem;position:relative;z-index:10}}
.detail .poster img{{width:100%;border-radius:.5rem;border:1px solid {border}}}
.rating{{display:inline-flex;gap:.5rem;background:{primary};border-radius:9999px;padding:.5rem 1rem;font-weight:700}}
.rating .star{{color:{accent}}}
.meta{{display:flex;gap:1rem;flex-wrap:wrap;align-items:center;color:{dim}}}
.chips span{{display:inline-block;margin:0 .5rem .5rem 0;padding:.5rem 1rem;background:{surface};border:1px solid {border};border-radius:.5rem;font-size:.875rem}}
.info-grid{{display:grid;grid-template-columns:1fr 1fr;gap:1rem;padding-top:1rem;border-top:1px solid {border}}}
.info-grid h4{{font-size:.875rem;color:{dim};margin:0 0 .25rem}}
.info-grid p{{font-size:1.25rem;font-weight:700;margin:0}}
.cast{{display:grid;grid-template-columns:repeat(6,1fr);gap:1rem}}
.cast .member{{background:{surface};border:1px solid {border};border-radius:.5rem;overflow:hidden}}
.cast img{{width:100%;height:10rem;object-fit:cover}}
.cast .who{{padding:.75rem}}
.cast .character{{color:{dim};font-size:.875rem}}
"#,
            bg = Self::BACKGROUND,
            surface = Self::SURFACE,
            border = Self::BORDER,
            primary = Self::PRIMARY,
            secondary = Self::SECONDARY,
            accent = Self::ACCENT,
            text = Self::TEXT,
            dim = Self::DIM,
            error = Self::ERROR,
        )
    }
}

/// Parse a `#rrggbb` color into its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
