//! Fixed conversation scaffold sent with every interpretation request.
//!
//! The instruction pins the reply contract the intent extractor relies on:
//! one JSON object with `entidade`, `nome` and `acao` fields using the
//! backend's wire vocabulary, or the all-null object when nothing matches.

use serde_json::{Value, json};

use crate::UploadedFile;

/// First user turn. Spells out the reply rules.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a home assistant that analyzes voice commands against an inventory of controllable items.
You will receive a JSON file with the inventory and a voice recording. The inventory groups items into sets ("dispositivos", "cenas", "acoesCena", "grupos"); each item carries its entity tag and its name.

Reply rules:
- If the voice command names an item from the "dispositivos" set, return {"entidade": "<item entity>", "nome": "<item name>", "acao": "<ligar or desligar>"}.
- If the voice command names an item from the "grupos" set, return {"entidade": "<item entity>", "nome": "<item name>", "acao": "<ligar or desligar>"}.
- If the voice command names an item from the "cenas" set, return {"entidade": "<item entity>", "nome": "<item name>", "acao": "<ligar or desligar>"}.
- If the voice command names an item from the "acoesCena" set and asks for it to run, return {"entidade": "<item entity>", "nome": "<item name>", "acao": "executar"}.
- If no listed item matches the voice command, return {"entidade": null, "nome": null, "acao": null}.
- If the voice command is unrelated to home items, return {"entidade": null, "nome": null, "acao": null}.

The entity tags are "Dispositivo", "Cena", "AcaoCena" and "Grupo", exactly as they appear in the inventory.

Your reply must contain ONLY the requested JSON object, with no extra text, explanation or markdown formatting.

Examples of valid replies:
{"entidade": "Dispositivo", "nome": "Luz Sala", "acao": "ligar"}
{"entidade": "AcaoCena", "nome": "Cinema", "acao": "executar"}
{"entidade": null, "nome": null, "acao": null}
Do not include phrases like "Sure, here it is:" or anything else outside the JSON object."#;

/// Fixed model acknowledgement turn.
pub const MODEL_ACK: &str = "Understood. Send the item list file and the voice command.";

/// Text of the final user turn, ahead of the two file references.
pub const USER_REQUEST: &str =
    "Analyze the following voice command against the item list in the JSON file.";

/// Assemble the `generateContent` request body around the two uploads.
#[must_use]
pub fn request_body(inventory: &UploadedFile, audio: &UploadedFile) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            {
                "role": "model",
                "parts": [{ "text": MODEL_ACK }]
            },
            {
                "role": "user",
                "parts": [
                    { "text": USER_REQUEST },
                    {
                        "file_data": {
                            "mime_type": inventory.mime_type,
                            "file_uri": inventory.uri
                        }
                    },
                    {
                        "file_data": {
                            "mime_type": audio.mime_type,
                            "file_uri": audio.uri
                        }
                    }
                ]
            }
        ]
    })
}
