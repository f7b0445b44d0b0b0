//! Plan generation: text prompt → `emit_floor_plan` tool call → validated plan.
//!
//! DESIGN
//! ======
//! The model is forced to answer through a single tool whose schema mirrors
//! `{rooms, doors}`. The tool input is decoded with the same rules as a file
//! import (closed room and door kinds, unique ids, recomputed size labels).
//! When decoding fails the error is returned to the model as a tool result
//! and it gets one more attempt. Nothing here touches the editor document;
//! callers apply the result with `EngineCore::apply_generated`.

use planner::doc::{Document, GeneratedPlan};
use planner::geometry::CanvasExtent;
use planner::persist::{self, PersistError};
use planner::standards::standards_context;
use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::config::DEFAULT_MAX_TOKENS;
use crate::llm::tools::{EMIT_FLOOR_PLAN, floor_plan_tool};
use crate::llm::types::{ChatRequest, Content, ContentBlock, LlmError, Message, ToolChoice};

/// Model turns allowed per generation, including repair attempts.
const MAX_ATTEMPTS: usize = 2;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("model did not return a floor plan: {text}")]
    NoPlan { text: String },
    #[error("model returned an invalid floor plan: {0}")]
    InvalidPlan(#[source] PersistError),
}

impl ErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPrompt => "E_EMPTY_PROMPT",
            Self::Llm(_) => "E_LLM_ERROR",
            Self::NoPlan { .. } => "E_NO_PLAN",
            Self::InvalidPlan(_) => "E_INVALID_PLAN",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::EmptyPrompt => false,
            Self::Llm(e) => e.retryable(),
            Self::NoPlan { .. } | Self::InvalidPlan(_) => true,
        }
    }
}

/// Request settings for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    pub max_tokens: u32,
    pub extent: CanvasExtent,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_MAX_TOKENS, extent: CanvasExtent::default() }
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

/// System prompt: coordinate conventions plus the room-size reference table.
#[must_use]
pub fn build_system_prompt(extent: &CanvasExtent) -> String {
    format!(
        "You are an architectural layout assistant. You design residential floor plans.\n\
         \n\
         Coordinate system:\n\
         - The canvas is {w}' wide and {h}' tall.\n\
         - All positions and sizes are percentages of the canvas (0-100).\n\
         - Rooms are axis-aligned rectangles: (x, y) is the top-left corner, w and h the size.\n\
         - Doors are positioned by their center and should sit on a wall shared by two rooms.\n\
         - One percent of width is {px}' and one percent of height is {py}'.\n\
         \n\
         Always answer by calling the `{tool}` tool exactly once.\n\
         \n\
         {standards}",
        w = extent.width_ft,
        h = extent.height_ft,
        px = extent.percent_to_feet_x(1.0),
        py = extent.percent_to_feet_y(1.0),
        tool = EMIT_FLOOR_PLAN,
        standards = standards_context(),
    )
}

/// User turn wrapping the free-text description.
#[must_use]
pub fn build_user_prompt(prompt: &str) -> String {
    format!(
        "Generate a floor plan layout based on the following description: \"{prompt}\".\n\
         \n\
         IMPORTANT:\n\
         1. Coordinates (x, y) and sizes (w, h) should align to a half-percent grid.\n\
         2. Ensure rooms are logically adjacent and doors are placed on shared walls or boundaries.\n\
         3. Provide realistic dimensions for the described rooms, using the standard sizes as a guide.\n\
         4. Rooms must stay inside the canvas: x + w <= 100 and y + h <= 100."
    )
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Ask the model for a floor plan matching `prompt`.
///
/// # Errors
///
/// Returns [`GenerateError`] when the prompt is blank, the LLM call fails, or
/// the model never produces a decodable plan. [`ErrorCode::retryable`] tells
/// the caller whether trying again may help.
pub async fn generate_plan(
    llm: &dyn LlmChat,
    prompt: &str,
    options: &GenerateOptions,
) -> Result<GeneratedPlan, GenerateError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }
    info!(prompt_len = prompt.len(), "generate: prompt received");

    let system = build_system_prompt(&options.extent);
    let tools = [floor_plan_tool()];
    let mut messages = vec![Message::user(build_user_prompt(prompt))];
    let mut last_error = None;

    for attempt in 1..=MAX_ATTEMPTS {
        let response = llm
            .chat(ChatRequest {
                max_tokens: options.max_tokens,
                system: &system,
                messages: &messages,
                tools: Some(&tools),
                tool_choice: Some(ToolChoice::Tool { name: EMIT_FLOOR_PLAN.into() }),
            })
            .await?;

        info!(
            attempt,
            model = %response.model,
            stop_reason = %response.stop_reason,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "generate: LLM response"
        );

        let Some((tool_use_id, input)) = response.tool_call(EMIT_FLOOR_PLAN) else {
            warn!(attempt, "generate: no tool call in response");
            return Err(GenerateError::NoPlan { text: response.text() });
        };

        match decode_plan(input, &options.extent) {
            Ok(plan) => {
                info!(attempt, rooms = plan.rooms.len(), doors = plan.doors.len(), "generate: plan accepted");
                return Ok(plan);
            }
            Err(e) => {
                warn!(attempt, error = %e, "generate: plan rejected");
                let tool_use_id = tool_use_id.to_owned();
                messages.push(Message { role: "assistant".into(), content: Content::Blocks(response.content) });
                messages.push(Message {
                    role: "user".into(),
                    content: Content::Blocks(vec![ContentBlock::ToolResult {
                        tool_use_id,
                        content: format!("The plan could not be used: {e}. Call the tool again with a corrected plan."),
                        is_error: Some(true),
                    }]),
                });
                last_error = Some(e);
            }
        }
    }

    Err(last_error.map_or(GenerateError::NoPlan { text: String::new() }, GenerateError::InvalidPlan))
}

/// Decode a tool input with file-import rules and keep only rooms and doors.
/// Unlike a file import, both `rooms` and `doors` must be present arrays.
fn decode_plan(input: &serde_json::Value, extent: &CanvasExtent) -> Result<GeneratedPlan, PersistError> {
    for collection in ["rooms", "doors"] {
        if !input.get(collection).is_some_and(serde_json::Value::is_array) {
            return Err(PersistError::InvalidEntry { collection, message: "expected an array".into() });
        }
    }
    let doc = persist::import_json(&Document::new(), &input.to_string(), extent)?;
    Ok(GeneratedPlan { rooms: doc.rooms, doors: doc.doors })
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
