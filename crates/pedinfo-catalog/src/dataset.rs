//! Built-in reference data: symptoms and diseases.
//!
//! Seeds reference symptoms by id; `reference_dataset` resolves them into the
//! by-value copies carried by each `Disease`.

use std::collections::{HashMap, HashSet};

use pedinfo_common::error::{PedinfoError, Result};
use pedinfo_common::{AgeGroup, Disease, Symptom};

pub(crate) struct SymptomSeed {
    pub id: u32,
    pub name: &'static str,
    pub description: Option<&'static str>,
}

pub(crate) struct DiseaseSeed {
    pub id: u32,
    pub name: &'static str,
    pub pathogen_type: &'static str,
    pub transmission: &'static str,
    pub age_group: AgeGroup,
    pub symptom_ids: &'static [u32],
    pub prevention: Option<&'static str>,
}

/// Materialized symptom and disease collections, in seed order.
/// Only constructed by `build`, which checks ids and symptom references.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) symptoms: Vec<Symptom>,
    pub(crate) diseases: Vec<Disease>,
}


/// Build the reference dataset shipped with the service.
pub fn reference_dataset() -> Result<Dataset> {
    build(SYMPTOMS, DISEASES)
}

pub(crate) fn build(symptom_seeds: &[SymptomSeed], disease_seeds: &[DiseaseSeed]) -> Result<Dataset> {
    let mut symptoms = Vec::with_capacity(symptom_seeds.len());
    let mut by_id: HashMap<u32, usize> = HashMap::with_capacity(symptom_seeds.len());

    for seed in symptom_seeds {
        if by_id.insert(seed.id, symptoms.len()).is_some() {
            return Err(PedinfoError::Dataset(format!("duplicate symptom id {}", seed.id)));
        }
        symptoms.push(Symptom {
            id: seed.id,
            name: seed.name.to_string(),
            description: seed.description.map(str::to_string),
        });
    }

    let mut seen_diseases = HashSet::with_capacity(disease_seeds.len());
    let mut diseases = Vec::with_capacity(disease_seeds.len());

    for seed in disease_seeds {
        if !seen_diseases.insert(seed.id) {
            return Err(PedinfoError::Dataset(format!("duplicate disease id {}", seed.id)));
        }

        let disease_symptoms = seed
            .symptom_ids
            .iter()
            .map(|sid| {
                by_id.get(sid).map(|&idx| symptoms[idx].clone()).ok_or_else(|| {
                    PedinfoError::Dataset(format!(
                        "disease {} references unknown symptom {}",
                        seed.id, sid
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        diseases.push(Disease {
            id: seed.id,
            name: seed.name.to_string(),
            pathogen_type: seed.pathogen_type.to_string(),
            transmission: seed.transmission.to_string(),
            age_group: seed.age_group,
            symptoms: disease_symptoms,
            prevention: seed.prevention.map(str::to_string),
        });
    }

    Ok(Dataset { symptoms, diseases })
}

// ---------------------------------------------------------------------------
// Symptoms
// ---------------------------------------------------------------------------

const SYMPTOMS: &[SymptomSeed] = &[
    SymptomSeed { id: 1, name: "Лихорадка", description: Some("Повышенная температура тела") },
    SymptomSeed { id: 2, name: "Сыпь", description: Some("Пятнистая или папулёзная сыпь") },
    SymptomSeed { id: 3, name: "Кашель", description: Some("Сухой или влажный кашель") },
    SymptomSeed { id: 4, name: "Насморк", description: Some("Выделения из носа") },
    SymptomSeed { id: 5, name: "Головная боль", description: Some("Боль различной интенсивности") },
    SymptomSeed { id: 6, name: "Рвота", description: Some("Обратное движение содержимого желудка") },
    SymptomSeed { id: 7, name: "Диарея", description: Some("Частый жидкий стул") },
    SymptomSeed { id: 8, name: "Боль в горле", description: Some("Воспаление слизистой горла") },
    SymptomSeed { id: 9, name: "Конъюнктивит", description: Some("Покраснение и воспаление глаз") },
    SymptomSeed { id: 10, name: "Увеличение лимфоузлов", description: Some("Лимфаденопатия") },
];

// ---------------------------------------------------------------------------
// Diseases
// ---------------------------------------------------------------------------

const DISEASES: &[DiseaseSeed] = &[
    DiseaseSeed {
        id: 1,
        name: "Корь",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Preschool,
        symptom_ids: &[1, 2, 10],
        prevention: Some("Вакцинация по национальному календарю"),
    },
    DiseaseSeed {
        id: 2,
        name: "Коклюш",
        pathogen_type: "Бактерия",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Under7,
        symptom_ids: &[1, 3],
        prevention: Some("Вакцинация (АКДС)"),
    },
    DiseaseSeed {
        id: 3,
        name: "Ветряная оспа",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[2, 1],
        prevention: Some("Изоляция заболевших, вакцинация"),
    },
    DiseaseSeed {
        id: 4,
        name: "Краснуха",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[2, 9],
        prevention: Some("Вакцинация (КПК)"),
    },
    DiseaseSeed {
        id: 5,
        name: "Скарлатина",
        pathogen_type: "Бактерия",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[8, 2, 1],
        prevention: Some("Своевременное назначение антибиотиков"),
    },
    DiseaseSeed {
        id: 6,
        name: "Свинка (эпидемический паротит)",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 10],
        prevention: Some("Вакцинация (КПК)"),
    },
    DiseaseSeed {
        id: 7,
        name: "Ротавирусная инфекция",
        pathogen_type: "Вирус",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Under7,
        symptom_ids: &[7, 6, 1],
        prevention: Some("Гигиена, оральная регидратация"),
    },
    DiseaseSeed {
        id: 8,
        name: "Менингококковая инфекция",
        pathogen_type: "Бактерия",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 5, 10],
        prevention: Some("Немедленное начало лечения, вакцинация"),
    },
    DiseaseSeed {
        id: 9,
        name: "Аденовирусная инфекция",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Preschool,
        symptom_ids: &[4, 7, 9],
        prevention: Some("Соблюдение гигиены, изоляция заболевших"),
    },
    DiseaseSeed {
        id: 10,
        name: "Энтеровирусная инфекция",
        pathogen_type: "Вирус",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[7, 6, 5],
        prevention: Some("Гигиена, контроль качества воды и пищи"),
    },
    DiseaseSeed {
        id: 11,
        name: "Грипп",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 5, 3],
        prevention: Some("Ежегодная вакцинация, изоляция заболевших"),
    },
    DiseaseSeed {
        id: 12,
        name: "ОРВИ",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[4, 3, 5],
        prevention: Some("Гигиена и поддерживающая терапия"),
    },
    DiseaseSeed {
        id: 13,
        name: "Ангина (острый тонзиллит)",
        pathogen_type: "Бактерия",
        transmission: "Контактный",
        age_group: AgeGroup::Children,
        symptom_ids: &[8, 1, 5],
        prevention: Some("Рациональная антибактериальная терапия"),
    },
    DiseaseSeed {
        id: 14,
        name: "Дифтерия",
        pathogen_type: "Бактерия",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[8, 1],
        prevention: Some("Вакцинация (АКДС)"),
    },
    DiseaseSeed {
        id: 15,
        name: "Пищевые токсикоинфекции",
        pathogen_type: "Бактерии",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[6, 7],
        prevention: Some("Соблюдение правил пищевой безопасности"),
    },
    DiseaseSeed {
        id: 16,
        name: "Норовирусная инфекция",
        pathogen_type: "Вирус",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Under7,
        symptom_ids: &[7, 6, 5],
        prevention: Some("Гигиена рук, контроль качества пищи и воды"),
    },
    DiseaseSeed {
        id: 17,
        name: "Коронавирусная инфекция (у детей)",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 3, 4],
        prevention: Some("Гигиена, масочный режим в сезон подъёма заболеваемости"),
    },
    DiseaseSeed {
        id: 18,
        name: "Парагрипп",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[3, 4, 1],
        prevention: Some("Изоляция заболевших, гигиена рук"),
    },
    DiseaseSeed {
        id: 19,
        name: "Эпидемический конъюнктивит",
        pathogen_type: "Вирус",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[9, 1],
        prevention: Some("Гигиена рук, индивидуальные полотенца"),
    },
    DiseaseSeed {
        id: 20,
        name: "Инфекционный мононуклеоз",
        pathogen_type: "Вирус",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 10, 5],
        prevention: Some("Ограничение бытовых контактов в период болезни"),
    },
    DiseaseSeed {
        id: 21,
        name: "Цитомегаловирусная инфекция",
        pathogen_type: "Вирус",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 5],
        prevention: Some("Соблюдение гигиены, обследование беременных"),
    },
    DiseaseSeed {
        id: 22,
        name: "Сальмонеллёз",
        pathogen_type: "Бактерия",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[7, 6, 1],
        prevention: Some("Термическая обработка продуктов, гигиена"),
    },
    DiseaseSeed {
        id: 23,
        name: "Шигеллёз (бактериальная дизентерия)",
        pathogen_type: "Бактерия",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[7, 1, 5],
        prevention: Some("Безопасная вода, санитарно-гигиенические мероприятия"),
    },
    DiseaseSeed {
        id: 24,
        name: "Лямблиоз",
        pathogen_type: "Паразит",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[7, 5],
        prevention: Some("Кипячение воды, мытьё рук и овощей"),
    },
    DiseaseSeed {
        id: 25,
        name: "Кишечная эшерихиозная инфекция",
        pathogen_type: "Бактерия",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Under7,
        symptom_ids: &[7, 6],
        prevention: Some("Соблюдение санитарных норм, контроль питания детей"),
    },
    DiseaseSeed {
        id: 26,
        name: "Герпетическая инфекция (простого герпеса)",
        pathogen_type: "Вирус",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 8],
        prevention: Some("Исключение тесных контактов в период высыпаний"),
    },
    DiseaseSeed {
        id: 27,
        name: "Вирусный гепатит А",
        pathogen_type: "Вирус",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 6, 7],
        prevention: Some("Вакцинация, безопасная вода и пища"),
    },
    DiseaseSeed {
        id: 28,
        name: "Вирусный гепатит B",
        pathogen_type: "Вирус",
        transmission: "Контактный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 5],
        prevention: Some("Вакцинация, одноразовые инструменты"),
    },
    DiseaseSeed {
        id: 29,
        name: "Клещевой энцефалит",
        pathogen_type: "Вирус",
        transmission: "Трансмиссивный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 5],
        prevention: Some("Вакцинация, защита от клещей"),
    },
    DiseaseSeed {
        id: 30,
        name: "Болезнь Лайма (боррелиоз)",
        pathogen_type: "Бактерия",
        transmission: "Трансмиссивный",
        age_group: AgeGroup::Children,
        symptom_ids: &[2, 5, 10],
        prevention: Some("Защита от клещей, раннее удаление клеща"),
    },
    DiseaseSeed {
        id: 31,
        name: "Стафилококковая кожная инфекция",
        pathogen_type: "Бактерия",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[2, 1],
        prevention: Some("Гигиена кожи, обработка микротравм"),
    },
    DiseaseSeed {
        id: 32,
        name: "Импетиго",
        pathogen_type: "Бактерия",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[2],
        prevention: Some("Гигиена, изоляция ребёнка до заживления элементов"),
    },
    DiseaseSeed {
        id: 33,
        name: "Педикулёз",
        pathogen_type: "Паразит",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[5],
        prevention: Some("Регулярный осмотр волос, обработка головных уборов"),
    },
    DiseaseSeed {
        id: 34,
        name: "Стрептодермия",
        pathogen_type: "Бактерия",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[2],
        prevention: Some("Гигиена, обработка кожных повреждений"),
    },
    DiseaseSeed {
        id: 35,
        name: "Острый бронхит",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[3, 4, 1],
        prevention: Some("Избегать переохлаждения, санация очагов инфекции"),
    },
    DiseaseSeed {
        id: 36,
        name: "Пневмония (бактериальная)",
        pathogen_type: "Бактерия",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[3, 1, 5],
        prevention: Some("Вакцинация против пневмококка, своевременное лечение ОРВИ"),
    },
    DiseaseSeed {
        id: 37,
        name: "Пневмония (вирусная)",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[3, 4, 1],
        prevention: Some("Профилактика ОРВИ, изоляция заболевших"),
    },
    DiseaseSeed {
        id: 38,
        name: "Острый синусит",
        pathogen_type: "Бактерия",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[4, 5, 1],
        prevention: Some("Лечение ринита, профилактика переохлаждения"),
    },
    DiseaseSeed {
        id: 39,
        name: "Острый средний отит",
        pathogen_type: "Бактерия",
        transmission: "Восходящий путь из носоглотки",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 5],
        prevention: Some("Лечение респираторных инфекций, защита ушей от воды"),
    },
    DiseaseSeed {
        id: 40,
        name: "Вирусный фарингит",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[8, 1, 5],
        prevention: Some("Гигиена, ограничение контактов в период заболеваемости"),
    },
    DiseaseSeed {
        id: 41,
        name: "Мезаденит (вирусной этиологии)",
        pathogen_type: "Вирус",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[1, 5],
        prevention: Some("Гигиена питания и рук"),
    },
    DiseaseSeed {
        id: 42,
        name: "Токсоплазмоз (у детей)",
        pathogen_type: "Паразит",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Children,
        symptom_ids: &[10, 5],
        prevention: Some("Термическая обработка мяса, гигиена при уходе за животными"),
    },
    DiseaseSeed {
        id: 43,
        name: "Энтеробиоз (глистная инвазия)",
        pathogen_type: "Паразит",
        transmission: "Фекально-оральный",
        age_group: AgeGroup::Children,
        symptom_ids: &[7, 5],
        prevention: Some("Гигиена рук, коротко подстриженные ногти, обработка постельного белья"),
    },
    DiseaseSeed {
        id: 44,
        name: "Кандидоз полости рта (молочница)",
        pathogen_type: "Грибок",
        transmission: "Контактно-бытовой",
        age_group: AgeGroup::Preschool,
        symptom_ids: &[8],
        prevention: Some("Гигиена полости рта, стерильность сосок и бутылочек"),
    },
    DiseaseSeed {
        id: 45,
        name: "Парвовирусная инфекция (инфекционная эритема)",
        pathogen_type: "Вирус",
        transmission: "Воздушно-капельный",
        age_group: AgeGroup::Children,
        symptom_ids: &[2, 1, 5],
        prevention: Some("Изоляция заболевших, соблюдение гигиены"),
    },
];
