//! Context accumulator for sequential execution.
//!
//! Renders the outputs of roles that already ran into a role-labelled
//! transcript handed to the next role. Long chains are capped: the oldest
//! outputs are dropped first, and a single oversized output is cut.

use super::value_objects::RoleOutput;

/// Default cap on the rendered transcript, in characters
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 12_000;

const TRUNCATED: &str = "\n[... truncated]\n";

/// Renders prior role outputs as prompt context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextAccumulator {
    max_chars: Option<usize>,
}

impl Default for ContextAccumulator {
    fn default() -> Self {
        Self {
            max_chars: Some(DEFAULT_MAX_CONTEXT_CHARS),
        }
    }
}

impl ContextAccumulator {
    /// `None` disables the cap
    pub fn new(max_chars: Option<usize>) -> Self {
        Self { max_chars }
    }

    pub fn unbounded() -> Self {
        Self { max_chars: None }
    }

    /// Transcript of `outputs` in order; empty when there are none.
    pub fn render(&self, outputs: &[RoleOutput]) -> String {
        let blocks: Vec<String> = outputs.iter().map(render_block).collect();
        let Some(max) = self.max_chars else {
            return blocks.join("\n");
        };

        // Keep the newest blocks that fit together with separators and the note.
        let mut kept = 0;
        let mut used = 0;
        for block in blocks.iter().rev() {
            let separator = usize::from(kept > 0);
            let note = omission_note(blocks.len() - kept - 1).chars().count();
            let len = block.chars().count();
            if used + separator + len + note > max {
                break;
            }
            used += separator + len;
            kept += 1;
        }

        let omitted = blocks.len() - kept;
        if kept == 0 {
            return match blocks.last() {
                Some(newest) => {
                    let note = omission_note(omitted - 1);
                    let room = max.saturating_sub(note.chars().count() + TRUNCATED.chars().count());
                    let cut: String = newest.chars().take(room).collect();
                    format!("{}{}{}", note, cut, TRUNCATED).chars().take(max).collect()
                }
                None => String::new(),
            };
        }

        format!("{}{}", omission_note(omitted), blocks[omitted..].join("\n"))
    }
}

fn render_block(output: &RoleOutput) -> String {
    format!("=== {} ===\n{}\n", output.role, output.text.trim())
}

fn omission_note(omitted: usize) -> String {
    match omitted {
        0 => String::new(),
        1 => "[1 earlier role output omitted]\n\n".to_string(),
        n => format!("[{} earlier role outputs omitted]\n\n", n),
    }
}
