//! Prompt builder for contract drafting.
//!
//! Turns the structured form into (a) a system directive encoding the
//! selected tone's register plus the mandatory clause checklist, and
//! (b) the user-turn draft request. The drafted contracts are Brazilian
//! agreements, so the prompts are written in Portuguese.

use minuta_types::contract::{ContractFormData, LanguageTone};

/// Tone guidance for the formal/rigorous register.
const TONE_FORMAL: &str = "Use linguagem jurídica erudita (juridiquês técnico), com termos \
latinos seculares quando apropriado e estrutura formal clássica.";

/// Tone guidance for the balanced register (also the fallback for any
/// unrecognized tone).
const TONE_BALANCED: &str = "Use uma linguagem profissional moderna, clara e direta, evitando \
arcaísmos mas mantendo a seriedade jurídica necessária.";

/// Tone guidance for the plain-language register.
const TONE_PLAIN: &str = "Use 'Plain Language' (Linguagem Simples). Evite jargões, use \
sentenças curtas e garanta que qualquer pessoa sem formação jurídica entenda perfeitamente \
os direitos e deveres.";

/// Default clause instruction when the user supplies none.
const DEFAULT_CLAUSES: &str = "Nenhuma específica, use o padrão jurídico";

/// Tone guidance text for a given tone. Fixed three-way switch.
pub fn tone_guidance(tone: LanguageTone) -> &'static str {
    match tone {
        LanguageTone::Formal => TONE_FORMAL,
        LanguageTone::Balanced => TONE_BALANCED,
        LanguageTone::PlainLanguage => TONE_PLAIN,
    }
}

/// Build the system directive for drafting and refinement.
///
/// Encodes the senior-counsel persona, the tone register, the mandatory
/// clause checklist (Objeto, Preço/Aluguel, Prazo, Rescisão, Foro,
/// Penalidades, LGPD), Markdown formatting, and the full-document reply
/// rule for refinements.
pub fn system_instruction(tone: LanguageTone) -> String {
    format!(
        r#"Você é o "Minuta", um Consultor Jurídico Sênior brasileiro de elite.
Sua tarefa é gerar e AJUSTAR contratos estruturados em português do Brasil.
ESTILO: {guidance}

REGRAS OBRIGATÓRIAS:
1. Identifique claramente as Partes no preâmbulo.
   - A Parte A deve ser tratada como CONTRATANTE ou LOCADOR.
   - A Parte B deve ser tratada como CONTRATADO ou LOCATÁRIO.
2. Inclua cláusulas essenciais (Objeto, Preço/Aluguel, Prazo, Obrigações, Rescisão, Foro, Penalidades, LGPD).
3. Formate em Markdown profissional (Use negrito para títulos de cláusulas).
4. REFINAMENTO: Quando o usuário pedir um ajuste, você DEVE retornar o TEXTO INTEGRAL DO CONTRATO com o ajuste aplicado. Não envie apenas a cláusula nova, envie o documento todo atualizado."#,
        guidance = tone_guidance(tone)
    )
}

/// Build the user-turn draft request from the form.
///
/// No validation beyond the caller's non-empty objective; party names
/// and clauses pass through verbatim. Blank clauses default to the
/// market-standard instruction.
pub fn draft_prompt(form: &ContractFormData) -> String {
    let clauses = if form.specific_clauses.trim().is_empty() {
        DEFAULT_CLAUSES
    } else {
        form.specific_clauses.as_str()
    };

    format!(
        r#"DADOS PARA O CONTRATO:
- Objetivo: {objective}
- Parte A (Contratante / Locador): {party_a}
- Parte B (Contratado / Locatário): {party_b}
- Cláusulas Adicionais: {clauses}

Por favor, redija a minuta completa do contrato agora."#,
        objective = form.objective,
        party_a = form.party_a,
        party_b = form.party_b,
    )
}
