//! Built-in mentoring journeys.
//!
//! Ships three default journeys (produtividade, oratória, aprendizado) with
//! Portuguese advice content. External catalogs with the same shape can be
//! loaded with [`KnowledgeBase::load_json`](crate::KnowledgeBase::load_json).

use crate::knowledge::{KnowledgeBase, Step, Topic};
use std::sync::Arc;

lazy_static::lazy_static! {
    static ref DEFAULT_BASE: Arc<KnowledgeBase> = Arc::new(
        KnowledgeBase::new(default_topics()).expect("built-in catalog is valid")
    );
}

/// Shared handle to the built-in knowledge base.
pub fn default_knowledge_base() -> Arc<KnowledgeBase> {
    Arc::clone(&DEFAULT_BASE)
}

/// The built-in journeys, in greeting order.
pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic::new(
            "produtividade",
            vec![
                Step::new(
                    "O primeiro passo para a super produtividade é gerenciar sua energia, \
                     não apenas seu tempo. Vamos começar com a 'Técnica Pomodoro': trabalhe \
                     com foco total por 25 minutos e depois faça uma pausa curta de 5 minutos. \
                     Isso mantém sua mente afiada.",
                    "Você já tentou usar um cronômetro para gerenciar suas tarefas assim?",
                ),
                Step::new(
                    "Ótimo! Agora que você está controlando os sprints de trabalho, vamos \
                     priorizar. Use a 'Matriz de Eisenhower': divida suas tarefas entre \
                     Urgente/Não Urgente e Importante/Não Importante. Foque no que é \
                     Importante, seja urgente ou não.",
                    "Isso ajuda a clarear o que você deve fazer a seguir?",
                ),
                Step::new(
                    "Excelente. O nível final é o 'Time Blocking'. Em vez de uma lista de \
                     tarefas, aloque blocos de tempo específicos no seu calendário para cada \
                     atividade importante. 'Das 14h às 15h: Foco total no relatório X'. Isso \
                     protege seu tempo e cria compromissos reais.",
                    "Pronto para tentar agendar seu próximo dia dessa forma?",
                ),
            ],
            "Você completou a jornada da Produtividade! Integrar essas três técnicas fará \
             uma diferença enorme.",
        )
        .with_synonyms(["produzir", "foco", "eficiência", "pomodoro", "organização"]),
        Topic::new(
            "oratória",
            vec![
                Step::new(
                    "Para dominar a oratória, o segredo é a estrutura. Antes de pensar nas \
                     palavras, defina sua 'Mensagem Central'. Qual é a ÚNICA coisa que você \
                     quer que sua audiência lembre? Todo o resto deve servir a essa mensagem.",
                    "Você consegue definir a Mensagem Central da sua próxima apresentação em \
                     uma única frase?",
                ),
                Step::new(
                    "Com a mensagem definida, crie um roteiro simples: 1) Abertura impactante \
                     (uma pergunta, um dado surpreendente), 2) Desenvolvimento (3 pontos que \
                     suportam sua mensagem) e 3) Fechamento (reforce a mensagem e faça uma \
                     chamada para ação).",
                    "Essa estrutura parece mais gerenciável do que um texto gigante para \
                     decorar?",
                ),
                Step::new(
                    "Finalmente, pratique a 'entrega'. Grave a si mesmo falando. Observe sua \
                     linguagem corporal, seu tom de voz e suas pausas. A naturalidade vem da \
                     prática deliberada, não da decoração. Respire fundo antes de começar!",
                    "Você se sente mais confiante para praticar agora?",
                ),
            ],
            "Parabéns! Com estrutura e prática, você está no caminho para se tornar um \
             comunicador memorável.",
        )
        .with_synonyms(["falar em público", "apresentação", "discurso", "comunicação"]),
        Topic::new(
            "aprendizado",
            vec![
                Step::new(
                    "Para aprender de verdade, precisamos ser ativos, não passivos. Comece \
                     com a 'Técnica Feynman': pegue um conceito e tente explicá-lo em termos \
                     simples, como se fosse para uma criança. Isso revela imediatamente onde \
                     estão as lacunas no seu entendimento.",
                    "Que tal tentar explicar o último conceito que você estudou agora?",
                ),
                Step::new(
                    "Agora vamos solidificar o conhecimento. Use a 'Repetição Espaçada'. Em \
                     vez de revisar 10 vezes em um dia, revise uma vez por dia ao longo de \
                     várias semanas. Ferramentas como o Anki automatizam isso e são \
                     extremamente poderosas para a memória de longo prazo.",
                    "Você já usou algum sistema de flashcards para estudar?",
                ),
                Step::new(
                    "Por fim, conecte o que você aprendeu com o que você já sabe. Crie \
                     analogias, metáforas ou mapas mentais. O conhecimento não deve ficar em \
                     'caixas' isoladas. Quanto mais conexões você criar, mais forte será a \
                     retenção.",
                    "Consegue pensar em uma analogia para algo que você aprendeu \
                     recentemente?",
                ),
            ],
            "Fantástico! Com aprendizado ativo, repetição espaçada e conexões, você se \
             tornou um mestre em aprender a aprender.",
        )
        .with_synonyms(["aprender", "estudar", "conhecimento", "estudo", "memorizar"]),
    ]
}
