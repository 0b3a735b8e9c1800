use proptest::prelude::*;
use seedrun_config::{Constants, PropertyStore};

proptest! {
    #[test]
    fn written_values_resolve_to_their_parse(
        runs in any::<i32>(),
        population in -1_000i32..1_000_000,
        genome in 0i32..4_096,
        generations in 0i32..100_000,
        mutation in 0.0f64..1.0,
        recombination in 0.0f64..1.0,
        pad in "[ \t]{0,3}",
    ) {
        let text = format!(
            "runs{pad}={pad}{runs}\n\
             population.size={population}\n\
             # comment between entries\n\
             genome.length={pad}{genome}{pad}\n\
             \n\
             generations={generations}\n\
             mutation.rate={mutation}\n\
             recombination.rate={recombination}\n"
        );
        let store = PropertyStore::parse(&text).unwrap();
        let constants = Constants::from_store(&store).unwrap();

        prop_assert_eq!(constants.runs(), runs);
        prop_assert_eq!(constants.population_size(), population);
        prop_assert_eq!(constants.genome_length(), genome);
        prop_assert_eq!(constants.generations(), generations);
        prop_assert_eq!(constants.mutation_rate(), mutation);
        prop_assert_eq!(constants.recombination_rate(), recombination);
    }
}
