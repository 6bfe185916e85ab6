// Errors raised while parsing note names.
//
// `Note::from_name` returns these; harmony_markov wraps them in its own
// error type when a chord template names a bad note.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteNameError {
    /// The leading character is not one of the letters A-G.
    #[error("invalid note name '{0}': expected a letter A-G")]
    InvalidNoteName(String),
    /// Something other than `#` or `b` between the letter and the octave.
    #[error("invalid accidental '{found}' in note name '{name}'")]
    InvalidAccidental { name: String, found: char },
    #[error("invalid octave in note name '{0}'")]
    InvalidOctave(String),
}
