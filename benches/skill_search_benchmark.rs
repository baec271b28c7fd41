use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skilldir::store::SkillIndex;

const NUM_USERS: usize = 10_000;

// A small vocabulary so popular tokens accumulate large user sets
const SKILLS: &[&str] = &[
    "Rust",
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "Django",
    "PostgreSQL",
    "Docker",
    "Kubernetes",
    "GraphQL",
];

fn populated_index() -> SkillIndex {
    let index = SkillIndex::new();
    for i in 0..NUM_USERS {
        let skills: Vec<String> = SKILLS
            .iter()
            .enumerate()
            .filter(|(j, _)| (i + j) % 3 == 0)
            .map(|(_, s)| s.to_string())
            .collect();
        index.add_user(&i.to_string(), &skills);
    }
    index
}

fn benchmark_skill_lookup(c: &mut Criterion) {
    let index = populated_index();

    let mut group = c.benchmark_group("skill_lookup");

    group.bench_function("popular_skill", |b| {
        b.iter(|| index.users_with_skill(black_box("Rust")))
    });

    group.bench_function("missing_skill", |b| {
        b.iter(|| index.users_with_skill(black_box("COBOL")))
    });

    group.finish();
}

fn benchmark_reindex(c: &mut Criterion) {
    let index = populated_index();
    let old: Vec<String> = vec!["Rust".to_string(), "React".to_string()];
    let new: Vec<String> = vec!["Python".to_string(), "Django".to_string()];

    c.bench_function("reindex_swap_two_skills", |b| {
        b.iter(|| {
            index.remove_user(black_box("42"), &old);
            index.add_user(black_box("42"), &new);
            index.remove_user(black_box("42"), &new);
            index.add_user(black_box("42"), &old);
        })
    });
}

criterion_group!(benches, benchmark_skill_lookup, benchmark_reindex);
criterion_main!(benches);
