//! Field reordering across statement layouts.
//!
//! OCR output presents the same transaction fields in several orders
//! depending on the app screen that was captured. Each [`LayoutKind`] binds
//! one recognized order to a rebuild that emits the canonical
//! `date description amount installment` form the assembler expects.

use regex::{Captures, Regex};
use tracing::debug;

use super::patterns::{
    INSTALLMENT_TAG, LAYOUT_FULL_INSTALLMENT, LAYOUT_INVERTED_SHORT, LAYOUT_NORMAL_FULL,
    LAYOUT_NORMAL_SHORT, WRAPPED_AMOUNT,
};

/// One recognized statement layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// `dd/mm DESCRIPTION R$ v [trailer]`
    NormalShort,
    /// `dd/mm R$ v DESCRIPTION [Parcela n de m]`
    InvertedShort,
    /// `dd/mm/yyyy DESCRIPTION R$ v trailer`
    NormalFull,
    /// `dd/mm/yy[yy] DESCRIPTION [Parcela n/m] R$v [Parcela n de m]`,
    /// amount possibly glued to the currency marker.
    FullInstallment,
}

/// Layout rules in canonicalization priority order; the first whose pattern
/// matches wins.
pub static LAYOUT_PRIORITY: [LayoutKind; 4] = [
    LayoutKind::NormalShort,
    LayoutKind::InvertedShort,
    LayoutKind::NormalFull,
    LayoutKind::FullInstallment,
];

impl LayoutKind {
    fn pattern(&self) -> &'static Regex {
        match self {
            LayoutKind::NormalShort => &LAYOUT_NORMAL_SHORT,
            LayoutKind::InvertedShort => &LAYOUT_INVERTED_SHORT,
            LayoutKind::NormalFull => &LAYOUT_NORMAL_FULL,
            LayoutKind::FullInstallment => &LAYOUT_FULL_INSTALLMENT,
        }
    }

    /// Rebuild a match into canonical field order.
    fn rebuild(&self, caps: &Captures<'_>) -> String {
        match self {
            LayoutKind::NormalShort | LayoutKind::NormalFull => {
                let date = &caps[1];
                let description = caps[2].trim();
                let amount = &caps[3];
                let trailer = caps[4].trim();
                format!("{date} {description} {amount} {trailer}")
                    .trim()
                    .to_string()
            }
            LayoutKind::InvertedShort => {
                let date = &caps[1];
                let amount = &caps[2];
                let mut description = caps[3].trim().to_string();
                let mut installment = caps.get(4).map(|m| m.as_str().to_string());

                // OCR sometimes glues extra text after the installment tag,
                // leaving it buried inside the description; pull it back out.
                if installment.is_none() {
                    if let Some(tag) = INSTALLMENT_TAG.find(&description) {
                        let tag_text = tag.as_str().to_string();
                        description = description.replace(&tag_text, "").trim().to_string();
                        installment = Some(tag_text);
                    }
                }

                match installment {
                    Some(tag) => format!("{date} {description} {amount} {tag}"),
                    None => format!("{date} {description} {amount}"),
                }
            }
            LayoutKind::FullInstallment => {
                let date = &caps[1];
                let description = caps[2].trim();
                let amount = &caps[5];
                let installment = caps
                    .get(3)
                    .zip(caps.get(4))
                    .or_else(|| caps.get(6).zip(caps.get(7)));
                match installment {
                    Some((current, total)) => format!(
                        "{date} {description} R$ {amount} Parcela {} de {}",
                        current.as_str(),
                        total.as_str()
                    ),
                    None => format!("{date} {description} R$ {amount}"),
                }
            }
        }
    }
}

/// Canonicalize one chunk's joined text.
///
/// Synthetic amount wrappers are first rewritten back to marked form so the
/// layout matchers can anchor on them. Text no rule recognizes passes
/// through unchanged for the assembler's defensive regroup.
pub fn canonicalize(raw: &str, layouts: &[LayoutKind]) -> String {
    let unwrapped = WRAPPED_AMOUNT.replace_all(raw, "R$$ ${1}");
    let text = unwrapped.trim();

    for layout in layouts {
        if let Some(caps) = layout.pattern().captures(text) {
            debug!("Canonicalized chunk via {:?} layout", layout);
            return layout.rebuild(&caps);
        }
    }

    debug!("No layout matched, passing chunk through");
    text.to_string()
}
