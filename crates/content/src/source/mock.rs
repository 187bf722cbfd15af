//! Mock content source for development and tests.
//!
//! Synthesizes plausible domain entities from fixed vocabularies, with an
//! optional simulated network delay and an injected failure rate. Both are
//! harness configuration, not system behavior: `MockConfig::instant()`
//! turns them off so tests stay deterministic and fast.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use url::form_urlencoded;

use geduc_core::{
    Collection, Department, FaqCategory, FaqId, FaqItem, FeaturedMedia, Initiative,
    InitiativeCategory, InitiativeId, InitiativeStatus, MediaId, MediaType, MemberId, Partner,
    PartnerCategory, PartnerId, SocialLink, SocialPlatform, TeamMember, Testimonial,
    TestimonialId,
};

use super::{CollectionPayload, ContentSource, FetchError};

// =============================================================================
// Configuration
// =============================================================================

/// Simulated network delay, sampled uniformly per fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    fn sample(self, rng: &mut impl Rng) -> Duration {
        let hi = self.max_ms.max(self.min_ms);
        Duration::from_millis(rng.random_range(self.min_ms..=hi))
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_ms: 200,
            max_ms: 800,
        }
    }
}

/// How many entities to generate per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSizes {
    pub team_members: usize,
    pub initiatives: usize,
    pub testimonials: usize,
    pub faq_items: usize,
    pub featured_media: usize,
    pub partners: usize,
}

impl FixtureSizes {
    #[must_use]
    pub const fn size(&self, collection: Collection) -> usize {
        match collection {
            Collection::TeamMembers => self.team_members,
            Collection::Initiatives => self.initiatives,
            Collection::Testimonials => self.testimonials,
            Collection::FaqItems => self.faq_items,
            Collection::FeaturedMedia => self.featured_media,
            Collection::Partners => self.partners,
        }
    }
}

impl Default for FixtureSizes {
    fn default() -> Self {
        Self {
            team_members: 12,
            initiatives: 15,
            testimonials: 8,
            faq_items: 20,
            featured_media: 1,
            partners: 10,
        }
    }
}

/// Mock source configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    /// Simulated network latency; `None` resolves fetches immediately.
    pub delay: Option<DelayRange>,
    /// Probability in `[0, 1]` that a fetch fails with a simulated error.
    pub error_rate: f64,
    pub sizes: FixtureSizes,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delay: Some(DelayRange::default()),
            error_rate: 0.05,
            sizes: FixtureSizes::default(),
        }
    }
}

impl MockConfig {
    /// Profile with no delay and no failure injection, for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            delay: None,
            error_rate: 0.0,
            ..Self::default()
        }
    }
}

// =============================================================================
// Source
// =============================================================================

/// Content source producing randomized fixture entities.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    config: MockConfig,
}

impl MockSource {
    #[must_use]
    pub const fn new(config: MockConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ContentSource for MockSource {
    async fn fetch(&self, collection: Collection) -> Result<CollectionPayload, FetchError> {
        if let Some(range) = self.config.delay {
            let wait = range.sample(&mut rand::rng());
            tokio::time::sleep(wait).await;
        }

        // The failure gate comes before any generation so a simulated
        // failure never produces a partial batch.
        let mut rng = rand::rng();
        if rng.random_bool(self.config.error_rate.clamp(0.0, 1.0)) {
            return Err(FetchError::Simulated);
        }

        let count = self.config.sizes.size(collection);
        Ok(generate_fixtures(collection, count, &mut rng))
    }
}

// =============================================================================
// Generators
// =============================================================================

/// Generate a batch of `count` fixture entities for `collection`.
///
/// A count of zero yields an empty batch without invoking the generator.
pub fn generate_fixtures(
    collection: Collection,
    count: usize,
    rng: &mut impl Rng,
) -> CollectionPayload {
    match collection {
        Collection::TeamMembers => CollectionPayload::TeamMembers(batch(count, rng, team_member)),
        Collection::Initiatives => CollectionPayload::Initiatives(batch(count, rng, initiative)),
        Collection::Testimonials => {
            CollectionPayload::Testimonials(batch(count, rng, testimonial))
        }
        Collection::FaqItems => CollectionPayload::FaqItems(batch(count, rng, faq_item)),
        Collection::FeaturedMedia => {
            CollectionPayload::FeaturedMedia(batch(count, rng, featured_media))
        }
        Collection::Partners => CollectionPayload::Partners(batch(count, rng, partner)),
    }
}

fn batch<T, R: Rng>(count: usize, rng: &mut R, generate: impl Fn(&mut R) -> T) -> Vec<T> {
    (0..count).map(|_| generate(rng)).collect()
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    items.choose(rng).expect("vocabulary slices are non-empty")
}

fn days_ago(rng: &mut impl Rng, max_days: i64) -> chrono::DateTime<Utc> {
    Utc::now() - TimeDelta::days(rng.random_range(0..max_days))
}

const FIRST_NAMES: &[&str] = &[
    "Ana", "Carlos", "Beatriz", "João", "Mariana", "Pedro", "Lucia", "Rafael",
];

const LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Costa", "Ferreira", "Almeida", "Pereira",
];

const fn positions_for(department: Department) -> &'static [&'static str] {
    match department {
        Department::Marketing => &[
            "Gerente de Marketing",
            "Analista de Marketing",
            "Especialista em Redes Sociais",
        ],
        Department::Juridico => &["Advogado Senior", "Analista Jurídico", "Consultor Legal"],
        Department::Educacao => &[
            "Coordenador Pedagógico",
            "Designer Instrucional",
            "Especialista em Educação",
        ],
        Department::Tecnologia => &[
            "Desenvolvedor Frontend",
            "Desenvolvedor Backend",
            "UX/UI Designer",
        ],
        Department::Administrativo => &[
            "Gerente Administrativo",
            "Analista Financeiro",
            "Assistente Administrativo",
        ],
    }
}

fn team_member(rng: &mut impl Rng) -> TeamMember {
    let first = *pick(rng, FIRST_NAMES);
    let last = *pick(rng, LAST_NAMES);
    let name = format!("{first} {last}");
    let department = *pick(rng, &Department::ALL);
    let position = *pick(rng, positions_for(department));

    TeamMember {
        id: MemberId::generate(),
        position: position.to_string(),
        department,
        avatar: format!("https://ui-avatars.com/api/?name={first}+{last}&background=random"),
        bio: Some(format!(
            "Profissional experiente em {} com foco em inovação e excelência.",
            department.label().to_lowercase()
        )),
        social_links: vec![SocialLink {
            platform: SocialPlatform::Linkedin,
            url: format!("https://linkedin.com/in/{}", slug::slugify(&name)),
            label: "LinkedIn".to_string(),
        }],
        featured: rng.random_bool(0.3),
        join_date: days_ago(rng, 365),
        name,
    }
}

const INITIATIVE_TITLES: &[&str] = &[
    "Educação Digital para Todos",
    "Tecnologia na Sala de Aula",
    "Capacitação de Professores",
    "Laboratório de Inovação",
    "Programa de Mentoria",
    "Sustentabilidade Educacional",
];

fn initiative(rng: &mut impl Rng) -> Initiative {
    let category = *pick(rng, &InitiativeCategory::ALL);
    let status = *pick(
        rng,
        &[
            InitiativeStatus::Active,
            InitiativeStatus::Completed,
            InitiativeStatus::Planned,
        ],
    );

    Initiative {
        id: InitiativeId::generate(),
        title: (*pick(rng, INITIATIVE_TITLES)).to_string(),
        description: format!(
            "Uma iniciativa inovadora focada em {} que visa transformar a experiência \
             educacional através de tecnologia de ponta e metodologias modernas.",
            category.label().to_lowercase()
        ),
        category,
        icon: category.as_str().to_string(),
        image_url: Some(format!(
            "https://picsum.photos/400/300?random={}",
            rng.random_range(0..1000)
        )),
        start_date: days_ago(rng, 180),
        end_date: (status == InitiativeStatus::Completed).then(|| days_ago(rng, 30)),
        status,
        featured: rng.random_bool(0.4),
        participants: Some(rng.random_range(50..550)),
        location: Some("São Paulo, SP".to_string()),
    }
}

const TESTIMONIAL_NAMES: &[&str] = &[
    "Maria Eduarda",
    "José Carlos",
    "Ana Paula",
    "Roberto Silva",
    "Fernanda Costa",
];

const TESTIMONIAL_POSITIONS: &[&str] = &[
    "Professora",
    "Diretor Escolar",
    "Coordenadora Pedagógica",
    "Estudante",
    "Educadora",
];

const TESTIMONIAL_COMPANIES: &[&str] = &[
    "Escola Municipal",
    "Instituto de Ensino",
    "Universidade Federal",
    "Colégio Particular",
    "ONG Educacional",
];

const TESTIMONIAL_TEXTS: &[&str] = &[
    "A GEDUC transformou completamente nossa abordagem educacional. Os resultados são impressionantes!",
    "Nunca vi uma plataforma tão intuitiva e eficaz para o ensino. Recomendo a todos os educadores.",
    "As ferramentas da GEDUC revolucionaram minha sala de aula. Os alunos estão mais engajados que nunca.",
    "Excelente suporte e metodologia inovadora. A educação digital finalmente faz sentido.",
    "Uma experiência incrível! A tecnologia aplicada à educação de forma verdadeiramente eficiente.",
];

fn testimonial(rng: &mut impl Rng) -> Testimonial {
    let name = *pick(rng, TESTIMONIAL_NAMES);

    Testimonial {
        id: TestimonialId::generate(),
        name: name.to_string(),
        position: (*pick(rng, TESTIMONIAL_POSITIONS)).to_string(),
        company: Some((*pick(rng, TESTIMONIAL_COMPANIES)).to_string()),
        avatar: format!(
            "https://ui-avatars.com/api/?name={}&background=random",
            urlencode(name)
        ),
        content: (*pick(rng, TESTIMONIAL_TEXTS)).to_string(),
        rating: Some(rng.random_range(4..=5)),
        date: days_ago(rng, 90),
        featured: rng.random_bool(0.5),
    }
}

const FAQ_ENTRIES: &[(&str, &str, FaqCategory)] = &[
    (
        "O que é a GEDUC?",
        "A GEDUC é uma organização dedicada a transformar a educação através da tecnologia \
         e inovação, criando soluções que conectam educadores e estudantes.",
        FaqCategory::Geral,
    ),
    (
        "Como posso participar das iniciativas?",
        "Você pode se inscrever através do nosso site ou entrar em contato diretamente \
         conosco. Temos programas para educadores, estudantes e instituições.",
        FaqCategory::Iniciativas,
    ),
    (
        "As iniciativas são gratuitas?",
        "Sim, a maioria das nossas iniciativas são gratuitas. Nosso objetivo é democratizar \
         o acesso à educação de qualidade.",
        FaqCategory::Iniciativas,
    ),
    (
        "Como posso entrar em contato com a equipe?",
        "Você pode nos contatar através do formulário de contato no site, e-mail ou redes \
         sociais. Nossa equipe está sempre disponível para ajudar.",
        FaqCategory::Contato,
    ),
    (
        "Quais tecnologias vocês utilizam?",
        "Utilizamos uma variedade de tecnologias modernas, incluindo plataformas web, \
         aplicativos móveis, realidade virtual e inteligência artificial aplicada à educação.",
        FaqCategory::Tecnologia,
    ),
];

fn faq_item(rng: &mut impl Rng) -> FaqItem {
    let entry_index = rng.random_range(0..FAQ_ENTRIES.len());
    let (question, answer, category) = FAQ_ENTRIES
        .get(entry_index)
        .copied()
        .unwrap_or(FAQ_ENTRIES[0]);

    FaqItem {
        id: FaqId::generate(),
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        order: u32::try_from(entry_index).unwrap_or(0) + 1,
        featured: rng.random_bool(0.3),
        last_updated: days_ago(rng, 30),
    }
}

fn featured_media(rng: &mut impl Rng) -> FeaturedMedia {
    FeaturedMedia {
        id: MediaId::generate(),
        title: "GEDUC revoluciona educação digital no Brasil".to_string(),
        description: "Nossa plataforma foi destaque na revista TechEdu como uma das \
                      principais inovações em educação digital."
            .to_string(),
        content: "A GEDUC tem se destacado no cenário educacional brasileiro com suas \
                  soluções inovadoras que integram tecnologia e pedagogia de forma única. \
                  Nossa abordagem holística tem transformado a experiência de ensino e \
                  aprendizado em centenas de instituições."
            .to_string(),
        author: "Maria Silva".to_string(),
        author_position: "Jornalista especializada em Educação".to_string(),
        media_type: MediaType::Article,
        image_url: "https://picsum.photos/600/400?random=media".to_string(),
        external_url: Some("https://techedu.com.br/geduc-inovacao".to_string()),
        publish_date: days_ago(rng, 14),
        tags: ["educação", "tecnologia", "inovação", "digital"]
            .map(str::to_string)
            .to_vec(),
    }
}

const PARTNER_NAMES: &[&str] = &[
    "Universidade Federal de São Paulo",
    "Instituto de Tecnologia Educacional",
    "Fundação Lemann",
    "Google for Education",
    "Microsoft Education",
    "Unesco Brasil",
];

const fn partner_focus(category: PartnerCategory) -> &'static str {
    match category {
        PartnerCategory::Educational => "educação",
        PartnerCategory::Government => "políticas públicas",
        PartnerCategory::Nonprofit => "impacto social",
        PartnerCategory::Sponsor => "investimento",
    }
}

fn partner(rng: &mut impl Rng) -> Partner {
    let name = *pick(rng, PARTNER_NAMES);
    let category = *pick(rng, &PartnerCategory::ALL);

    Partner {
        id: PartnerId::generate(),
        name: name.to_string(),
        logo: format!(
            "https://ui-avatars.com/api/?name={}&background=random&format=svg",
            urlencode(name)
        ),
        website: Some(format!(
            "https://{}.org.br",
            slug::slugify(name).replace('-', "")
        )),
        description: Some(format!(
            "Parceiro estratégico da GEDUC na área de {}.",
            partner_focus(category)
        )),
        category,
        featured: rng.random_bool(0.4),
    }
}

fn urlencode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
