use ferramentas::gemini::{GenerateContentRequest, ResponseFormat};
use ferramentas::tools::prompts::{
    BROADCAST_SYSTEM_PROMPT, HEADLINE_SYSTEM_PROMPT, REPORT_FIELDS, THREAD_SYSTEM_PROMPT,
    field_text, report_schema,
};
use ferramentas::tools::{PostProcess, TOOLS, find_by_name, find_by_path};
use serde_json::{Map, Value, json};

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_tool_names_and_routes_are_unique() {
    for (i, a) in TOOLS.iter().enumerate() {
        for b in TOOLS.iter().skip(i + 1) {
            assert_ne!(a.name, b.name);
            assert_ne!(a.route.to_lowercase(), b.route.to_lowercase());
        }
    }
}

#[test]
fn test_required_fields_per_tool() {
    let expected: [(&str, &[&str]); 6] = [
        ("otimizador", &["prompt"]),
        ("abordagens", &["userQuery", "systemPrompt"]),
        ("pratv", &["text", "paragraphLimit"]),
        ("rascunhando_bo", &["prompt"]),
        ("revisor", &["userQuery", "systemPrompt"]),
        ("generate_thread", &["url"]),
    ];

    for (name, required) in expected {
        let tool = find_by_name(name).expect("tool registered");
        assert_eq!(tool.required_fields, required, "{name}");
    }
}

#[test]
fn test_only_reviewer_uses_cors_and_only_broadcast_note_post_processes() {
    for tool in &TOOLS {
        assert_eq!(tool.cors, tool.name == "revisor", "{}", tool.name);
        let expected = if tool.name == "pratv" {
            PostProcess::EmbeddedJson
        } else {
            PostProcess::Forward
        };
        assert_eq!(tool.post_process, expected, "{}", tool.name);
    }
}

#[test]
fn test_find_by_path() {
    assert_eq!(find_by_path("/api/PraTV").map(|t| t.name), Some("pratv"));
    assert_eq!(find_by_path("/prod/api/pratv/").map(|t| t.name), Some("pratv"));
    assert_eq!(
        find_by_path("/Ferramentas/Threads/api/Otimizador").map(|t| t.name),
        Some("otimizador")
    );
    assert!(find_by_path("/api/unknown").is_none());
    assert!(find_by_path("/").is_none());
}

#[test]
fn test_find_by_name_ignores_case() {
    assert_eq!(find_by_name("Revisor").map(|t| t.route), Some("/api/Revisor"));
    assert!(find_by_name("nope").is_none());
}

#[test]
fn test_field_text_renders_non_strings_as_json() {
    let f = fields(json!({ "a": "texto", "b": 3, "c": true }));
    assert_eq!(field_text(&f, "a"), "texto");
    assert_eq!(field_text(&f, "b"), "3");
    assert_eq!(field_text(&f, "c"), "true");
    assert_eq!(field_text(&f, "missing"), "");
}

#[test]
fn test_headline_optimizer_requests_json_with_fixed_instruction() {
    let tool = find_by_name("otimizador").unwrap();
    let spec = (tool.build_prompt)(&fields(json!({ "prompt": "Chuva em SP" })));

    assert_eq!(spec.user_text, "Chuva em SP");
    assert_eq!(spec.system_text.as_deref(), Some(HEADLINE_SYSTEM_PROMPT));
    assert!(!spec.search_tool);
    assert_eq!(spec.response_format, ResponseFormat::Json);
    assert!(HEADLINE_SYSTEM_PROMPT.contains("69 caracteres"));
}

#[test]
fn test_approach_generator_uses_caller_system_prompt_and_search() {
    let tool = find_by_name("abordagens").unwrap();
    let spec = (tool.build_prompt)(&fields(
        json!({ "userQuery": "Tema", "systemPrompt": "Você é um pauteiro" }),
    ));

    assert_eq!(spec.user_text, "Tema");
    assert_eq!(spec.system_text.as_deref(), Some("Você é um pauteiro"));
    assert!(spec.search_tool);
    assert_eq!(spec.response_format, ResponseFormat::Text);
}

#[test]
fn test_broadcast_note_embeds_text_and_limit() {
    let tool = find_by_name("pratv").unwrap();
    let spec = (tool.build_prompt)(&fields(
        json!({ "text": "O prefeito inaugurou a ponte.", "paragraphLimit": 2 }),
    ));

    assert!(spec.user_text.contains("limite máximo de 2 parágrafos"));
    assert!(spec.user_text.contains("---\nO prefeito inaugurou a ponte.\n---"));
    assert!(spec.user_text.contains("\"nota_pelada\""));
    assert!(spec.user_text.contains("\"nota_coberta\""));
    assert_eq!(spec.system_text.as_deref(), Some(BROADCAST_SYSTEM_PROMPT));
    assert!(!spec.search_tool);
}

#[test]
fn test_report_draft_uses_fixed_schema() {
    let tool = find_by_name("rascunhando_bo").unwrap();
    let spec = (tool.build_prompt)(&fields(json!({ "prompt": "BO de furto" })));

    assert_eq!(spec.system_text, None);
    assert_eq!(spec.response_format, ResponseFormat::JsonSchema(report_schema()));

    let schema = report_schema();
    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(schema["required"], json!(REPORT_FIELDS));
    for field in REPORT_FIELDS {
        assert_eq!(schema["properties"][field]["type"], "STRING");
    }
}

#[test]
fn test_thread_summarizer_references_url() {
    let tool = find_by_name("generate_thread").unwrap();
    let spec = (tool.build_prompt)(&fields(json!({ "url": "https://g1.globo.com/x" })));

    assert!(spec.user_text.ends_with("crie uma thread: https://g1.globo.com/x"));
    assert_eq!(spec.system_text.as_deref(), Some(THREAD_SYSTEM_PROMPT));
    assert!(spec.search_tool);
}

#[test]
fn test_report_payload_places_schema_under_generation_config() {
    let tool = find_by_name("rascunhando_bo").unwrap();
    let payload = GenerateContentRequest::from((tool.build_prompt)(&fields(
        json!({ "prompt": "BO" }),
    )));
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(value["generationConfig"]["responseSchema"], report_schema());
    assert!(value.get("systemInstruction").is_none());
    assert!(value.get("tools").is_none());
}
