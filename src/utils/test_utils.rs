#[cfg(test)]
use crate::commands::classify;
#[cfg(test)]
use crate::core::history::History;
#[cfg(test)]
use crate::core::line::ChatLine;

/// Classifies `raw` and unwraps the line, whichever way classification went.
#[cfg(test)]
pub fn classified(raw: &str) -> ChatLine {
    classify(raw).into_line()
}

/// Builds a transcript from raw lines, classifying each in order.
#[cfg(test)]
pub fn transcript(raws: &[&str]) -> History {
    let mut history = History::new();
    for raw in raws {
        history.push(classified(raw));
    }
    history
}
