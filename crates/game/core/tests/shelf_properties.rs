use proptest::prelude::*;
use realm_core::stats::{UnitSources, floor_div, resolve};
use realm_core::{
    AreaEffectRule, CatalogSnapshot, ExperienceLevel, ExperienceLevelRule, PossessedSkills, Shelf,
    SignPolicy, SkillBonus, SkillId, SkillOrigin, SkillRule, WeaponGradeRule,
};

#[derive(Debug, Clone)]
struct Fixture {
    basic: Option<i32>,
    weapon: i32,
    experience: i32,
    area: i32,
    spell: i32,
    hero_divisor: i32,
    hero_strength: Option<i32>,
    level: u8,
}

fn fixture() -> impl Strategy<Value = Fixture> {
    (
        prop::option::of(-50..50i32),
        -20..20i32,
        -20..20i32,
        -20..20i32,
        -20..20i32,
        prop_oneof![-4..=-1i32, 1..=4i32],
        prop::option::of(-5..10i32),
        0..9u8,
    )
        .prop_map(
            |(basic, weapon, experience, area, spell, hero_divisor, hero_strength, level)| Fixture {
                basic,
                weapon,
                experience,
                area,
                spell,
                hero_divisor,
                hero_strength,
                level,
            },
        )
}

fn sign_policy() -> impl Strategy<Value = SignPolicy> {
    prop_oneof![
        Just(SignPolicy::Both),
        Just(SignPolicy::PositiveOnly),
        Just(SignPolicy::NegativeOnly),
    ]
}

struct Rules {
    catalog: CatalogSnapshot,
    weapon: WeaponGradeRule,
    experience: ExperienceLevelRule,
    area: AreaEffectRule,
}

fn rules(f: &Fixture) -> Rules {
    let catalog = CatalogSnapshot::new()
        .with_skill(SkillRule::innate("US004"))
        .with_skill(
            SkillRule::new("SS01", SkillOrigin::Spell)
                .with_bonus(SkillBonus::fixed("US004", f.spell)),
        )
        .with_skill(
            SkillRule::new("HS01", SkillOrigin::Hero)
                .with_bonus(SkillBonus::scaled("US004", f.hero_divisor)),
        );

    Rules {
        catalog,
        weapon: WeaponGradeRule::new("WG").with_bonus(SkillBonus::fixed("US004", f.weapon)),
        experience: ExperienceLevelRule::new(ExperienceLevel(f.level))
            .with_bonus(SkillBonus::fixed("US004", f.experience)),
        area: AreaEffectRule::new("CAE").with_bonus(SkillBonus::fixed("US004", f.area)),
    }
}

fn possessed(f: &Fixture) -> PossessedSkills {
    let mut skills = PossessedSkills::new().with_valueless("SS01");
    if let Some(basic) = f.basic {
        skills.insert("US004", basic);
    }
    match f.hero_strength {
        Some(strength) => skills.insert("HS01", strength),
        None => skills.insert_valueless("HS01"),
    }
    skills
}

proptest! {
    #[test]
    fn all_equals_sum_of_shelves(f in fixture(), sign in sign_policy()) {
        let rules = rules(&f);
        let oracle = rules.catalog.oracle();
        let skills = possessed(&f);
        let area_effects = [&rules.area];
        let unit = UnitSources {
            skills: &skills,
            weapon_grade: Some(&rules.weapon),
            experience_level: Some(ExperienceLevel(f.level)),
            experience: Some(&rules.experience),
            area_effects: &area_effects,
        };
        let target = SkillId::from("US004");

        let all = resolve(&unit, &target, Shelf::All, sign, &oracle).unwrap();
        let basic = resolve(&unit, &target, Shelf::Basic, sign, &oracle).unwrap();
        let mut parts = basic;
        for shelf in Shelf::BONUSES {
            let part = resolve(&unit, &target, shelf, sign, &oracle).unwrap();
            parts = parts.zip(part).map(|(a, b)| a + b);
        }
        prop_assert_eq!(all, parts);

        if f.basic.is_none() {
            prop_assert_eq!(all, None);
        }
    }

    #[test]
    fn hero_bonus_floors_scaled_level(f in fixture()) {
        let rules = rules(&f);
        let oracle = rules.catalog.oracle();
        let skills = possessed(&f).with("US004", 0);
        let unit = UnitSources {
            experience_level: Some(ExperienceLevel(f.level)),
            ..UnitSources::skills_only(&skills)
        };

        let strength = match f.hero_strength.unwrap_or(0) {
            0 => 1,
            strength => strength,
        };
        let source_level = (i32::from(f.level) + 1) * strength;
        let expected = (f64::from(source_level) / f64::from(f.hero_divisor)).floor() as i32;
        prop_assert_eq!(floor_div(source_level, f.hero_divisor), Some(expected));

        let hero = resolve(&unit, &"US004".into(), Shelf::HeroSkillDerived, SignPolicy::Both, &oracle)
            .unwrap();
        prop_assert_eq!(hero, Some(expected));
    }
}
