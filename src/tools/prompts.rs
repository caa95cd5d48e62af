//! Prompt builders for each newsroom tool.
//!
//! Every builder receives a body that already passed required-field
//! validation.

use serde_json::{Map, Value, json};

use crate::gemini::{PromptSpec, ResponseFormat};

pub const HEADLINE_SYSTEM_PROMPT: &str = "Você é um especialista em SEO para portais de notícias, com vasta experiência em otimização de títulos para mecanismos de busca (Google) e redes sociais. Sua tarefa é analisar o conteúdo fornecido e gerar sugestões de títulos que maximizem o alcance e o engajamento. Para a redação que usará esta ferramenta, o tamanho limite para um título é exatamente 69 caracteres. Leve isso como uma regra. Responda sempre em português do Brasil.";

pub const BROADCAST_SYSTEM_PROMPT: &str = "Você é um jornalista de TV experiente, sênior, editor-chefe de telejornais da TV Globo.
Objetivo geral: Transformar qualquer texto enviado pelo usuário em um texto pronto para exibição em telejornal, no formato NOTA COBERTA ou NOTA PELADA, respeitando as normas da língua portuguesa, o estilo jornalístico televisivo e a linguagem popular.
Formatação final: O texto final deve estar em CAIXA ALTA. Vírgulas devem ser representadas por / e ponto final por //.";

pub const THREAD_SYSTEM_PROMPT: &str = "Você é um especialista em mídias sociais que cria threads para o X (Twitter). Sua tarefa é resumir uma reportagem em uma thread.
REGRAS:
1. FIDELIDADE AO TEXTO: NÃO insira NENHUMA informação que não esteja no texto da reportagem. Não invente nomes, cargos, dados ou altere o sentido do texto original. O material para a thread é EXCLUSIVAMENTE o texto da reportagem.
2. Crie entre 4 e 10 tweets.
3. Numere cada tweet (ex: 1/5, 2/5...).
4. Cada tweet deve ter menos de 280 caracteres.
5. Use emojis relevantes.
6. O último tweet deve conter 3-5 hashtags.
7. Mantenha um tom neutro e jornalístico.
8. A resposta DEVE ser em português do Brasil.
9. IMPORTANTE: Sua resposta deve conter APENAS a thread numerada, sem nenhuma introdução, título, conclusão ou qualquer outro texto. Comece diretamente no \"1/X\".";

/// Fields the report generator's schema requires, in output order.
pub const REPORT_FIELDS: [&str; 4] = ["titulo", "subtitulo", "materia", "resumo_agora"];

/// Renders a body field as prompt text. Strings are used verbatim, anything
/// else as its JSON text.
#[must_use]
pub fn field_text(fields: &Map<String, Value>, name: &str) -> String {
    match fields.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

pub fn headline_optimizer(fields: &Map<String, Value>) -> PromptSpec {
    PromptSpec::user(field_text(fields, "prompt"))
        .system(HEADLINE_SYSTEM_PROMPT)
        .format(ResponseFormat::Json)
}

/// Caller supplies the system prompt; answers may use Google Search.
pub fn approach_generator(fields: &Map<String, Value>) -> PromptSpec {
    PromptSpec::user(field_text(fields, "userQuery"))
        .system(field_text(fields, "systemPrompt"))
        .with_search()
}

pub fn broadcast_note(fields: &Map<String, Value>) -> PromptSpec {
    let text = field_text(fields, "text");
    let limit = field_text(fields, "paragraphLimit");
    let user = format!(
        "Transforme o texto a seguir. Gere a NOTA PELADA e a NOTA COBERTA, respeitando o limite máximo de {limit} parágrafos. \n\nTEXTO BRUTO:\n---\n{text}\n---\n\nResponda APENAS com um objeto JSON válido no formato a seguir, sem nenhuma formatação de markdown ou texto adicional: {{\"nota_pelada\": \"TEXTO DA NOTA PELADA AQUI...\", \"nota_coberta\": \"TEXTO DA NOTA COBERTA COM SUGESTÕES DE IMAGEM AQUI...\"}}"
    );

    PromptSpec::user(user).system(BROADCAST_SYSTEM_PROMPT)
}

#[must_use]
pub fn report_schema() -> Value {
    let properties: Map<String, Value> = REPORT_FIELDS
        .iter()
        .map(|name| ((*name).to_string(), json!({ "type": "STRING" })))
        .collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": REPORT_FIELDS,
    })
}

pub fn report_draft(fields: &Map<String, Value>) -> PromptSpec {
    PromptSpec::user(field_text(fields, "prompt"))
        .format(ResponseFormat::JsonSchema(report_schema()))
}

pub fn text_reviewer(fields: &Map<String, Value>) -> PromptSpec {
    PromptSpec::user(field_text(fields, "userQuery")).system(field_text(fields, "systemPrompt"))
}

pub fn thread_summarizer(fields: &Map<String, Value>) -> PromptSpec {
    let url = field_text(fields, "url");
    PromptSpec::user(format!(
        "Com base no conteúdo da reportagem no link a seguir, crie uma thread: {url}"
    ))
    .system(THREAD_SYSTEM_PROMPT)
    .with_search()
}
