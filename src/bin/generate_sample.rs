/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let first_names = [
        "Alice", "Bob", "Carol", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Ines", "Jonas",
        "Keiko", "Lars", "Mara", "Noor", "Otto", "Priya",
    ];
    let last_names = [
        "Andersson", "Baptiste", "Chen", "Diallo", "Eriksen", "Fischer", "Garcia", "Haddad",
        "Ivanova", "Jensen", "Kovacs", "Lindqvist", "Moreau", "Novak",
    ];
    let roles = ["Support", "Engineering", "Sales", "Management"];
    let teams = ["Atlas", "Borealis", "Cascade"];
    let regions = ["Americas", "APAC", "EMEA"];

    let output_path = "sample_roster.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Name", "Role", "Team", "Region", "Birthday"])
        .expect("Failed to write header");

    let n_rows = 60;
    for i in 0..n_rows {
        let name = format!(
            "{} {}",
            rng.pick(&first_names),
            rng.pick(&last_names)
        );
        // Birthdays between 1970-01-01 (serial 25569) and ~2000.
        let birthday = (25569 + (rng.next_u64() % 10958) as i64).to_string();
        // Leave an occasional region blank so empty facet values show up.
        let region = if i % 8 == 7 { "" } else { rng.pick(&regions) };

        writer
            .write_record([
                name.as_str(),
                rng.pick(&roles),
                rng.pick(&teams),
                region,
                birthday.as_str(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} rows to {output_path}");
}
