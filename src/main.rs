use foldnet::{
    back_propagation, evaluate_algorithm, generate_dataset, mean_accuracy,
    Regularization, Sgd, TrainConfig,
};

fn main() {
    let n_folds = 5;
    let n_hidden = 4;
    let optimizer = Sgd::new(0.7);
    let config = TrainConfig::new(10, Regularization::L1);

    let mut rng = rand::thread_rng();
    let dataset = generate_dataset(1000, &mut rng);

    let scores = evaluate_algorithm(
        &dataset,
        |train, test, rng| back_propagation(train, test, n_hidden, &optimizer, &config, rng),
        n_folds,
        &mut rng,
    );

    println!("Scores: {:?}", scores);
    println!("Mean Accuracy: {:.3}%", mean_accuracy(&scores));
}
