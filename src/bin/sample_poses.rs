// Random pose sampling demo
//
// Builds a flat 50x50 terrain, picks a random robot pose, then classifies
// randomly sampled candidate poses with the segment validity predicate,
// the way an RRT-style planner would filter its expansion candidates.

use std::f64::consts::PI;

use gnuplot::{AutoOption, AxesCommon, Figure, PlotOption, PointSize, PointSymbol};
use rand::Rng;

use terrain_nav::{Pose, Terrain};

const MAP_SIZE: usize = 50;
const N_SAMPLES: usize = 20_000;

fn main() {
    println!("Pose sampling demo start!");

    // Walk a pose around a full circle in eighth turns
    let mut pose = Pose::new(1.0, 2.0, 0.0).unwrap();
    println!("{}", pose);
    for _ in 0..8 {
        pose = pose.rotate(PI / 4.0);
        println!("{}", pose);
    }

    let terrain = Terrain::new(MAP_SIZE, MAP_SIZE, 10).unwrap();
    let mut rng = rand::thread_rng();

    let robot = random_pose(&mut rng);
    println!("Robot pose: {}", robot);

    let mut valid_x = Vec::new();
    let mut valid_y = Vec::new();
    let mut invalid_x = Vec::new();
    let mut invalid_y = Vec::new();

    for _ in 0..N_SAMPLES {
        let sample = random_pose(&mut rng);
        if terrain.path_is_valid(&robot, &sample).unwrap() {
            valid_x.push(sample.x());
            valid_y.push(sample.y());
        } else {
            invalid_x.push(sample.x());
            invalid_y.push(sample.y());
        }
    }

    println!(
        "{} of {} sampled poses are reachable in one segment",
        valid_x.len(),
        N_SAMPLES
    );

    let mut fig = Figure::new();
    fig.axes2d()
        .set_title("Single-segment reachability", &[])
        .set_x_label("x", &[])
        .set_y_label("y", &[])
        .set_aspect_ratio(AutoOption::Fix(1.0))
        .points(
            &invalid_x,
            &invalid_y,
            &[
                PlotOption::Caption("Invalid"),
                PlotOption::Color("#DD3355"),
                PointSymbol('.'),
            ],
        )
        .points(
            &valid_x,
            &valid_y,
            &[
                PlotOption::Caption("Valid"),
                PlotOption::Color("#35C788"),
                PointSymbol('O'),
            ],
        )
        .points(
            &[robot.x()],
            &[robot.y()],
            &[
                PlotOption::Caption("Robot"),
                PlotOption::Color("black"),
                PointSymbol('O'),
                PointSize(2.0),
            ],
        );

    fig.save_to_svg("./img/sample_poses.svg", 640, 640).unwrap();
    println!("Plot saved to ./img/sample_poses.svg");
}

fn random_pose<R: Rng>(rng: &mut R) -> Pose {
    let x = rng.gen_range(0.0..MAP_SIZE as f64);
    let y = rng.gen_range(0.0..MAP_SIZE as f64);
    let angle = rng.gen_range(0.0..2.0 * PI);
    Pose::new(x, y, angle).unwrap()
}
