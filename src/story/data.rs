//! The reference story: eight stages of getting Lucy ready for her date.

use crate::model::{Choice, Effect, Ending, Flag, Secondary, Stage};

use Effect::{AddTension, IncrementIgnored, SetFlag};

pub(super) const STAGES: [Stage; 8] = [
    Stage {
        number: 1,
        note: "안녕! 오늘은 정말 중요한 날이야 💕\n데이트 준비를 도와줄래?\n먼저 옷부터 골라보자!",
        prompt: "오늘은 테니스를 치러 갈 거니까 🎾\n스포티하면서도 귀여운 룩으로 부탁해!",
        choices: &[
            Choice::new("1", "1번: 스포티 셋업", "꺄! 이거 완전 내 스타일이야 💗", &[]),
            Choice::new("2", "2번: 테니스 원피스", "깔끔하고 예쁘다… 오늘은 이걸로 😊", &[]),
            Choice::new(
                "3",
                "3번: 트랙수트",
                "음… 조금 강해 보이지만, 괜찮겠지?",
                &[IncrementIgnored(1), AddTension(1)],
            ),
            Choice::new(
                "4",
                "4번: 두꺼운 후드 + 모자",
                "뭔가 숨기고 싶을 때 입는 옷 같아…",
                &[IncrementIgnored(1), AddTension(1)],
            ),
        ],
        secondary: None,
    },
    Stage {
        number: 2,
        note: "생각해보니까…\n약속 시간보다 조금 일찍 준비해도 괜찮겠지? 😊\n오늘은 왠지 기분이 좋아.",
        prompt: "가벼운 아우터를 입을까 말까 고민 중이야!",
        choices: &[
            Choice::new("1", "1번: 리본 달린 바람막이", "귀엽다! 바람이 불어도 괜찮겠어 🎀", &[]),
            Choice::new("2", "2번: 가디건", "따뜻하고 예쁘네. 좋아!", &[]),
            Choice::new("3", "3번: 두꺼운 재킷", "조금… 무겁다. 그래도 입을까?", &[AddTension(1)]),
            Choice::new(
                "4",
                "4번: 아우터 안 입기",
                "괜찮아. 별로 춥지도 않았어.",
                &[IncrementIgnored(1), AddTension(1)],
            ),
        ],
        secondary: Some(Secondary {
            banner: "방금… 들었어? 되게 기분 나쁘다.",
            flash: Some("현관 쪽에서… 발소리가 난 것 같았어."),
            choices: &[
                Choice::new(
                    "door_peek",
                    "문을 확인한다",
                    "잠깐… 문고리가 따뜻해.",
                    &[SetFlag(Flag::CheckedDoor), AddTension(1)],
                ),
                Choice::new(
                    "ignore",
                    "무시한다",
                    "착각이겠지. 귀찮아…",
                    &[IncrementIgnored(1), AddTension(1)],
                ),
            ],
        }),
    },
    Stage {
        number: 3,
        note: "방금 말한 소리 말이야…\n아마 착각이겠지? 😅\n그래도 옷은 제대로 골라야지!",
        prompt: "치마가 좋을까? 반바지가 좋을까?",
        choices: &[
            Choice::new("1", "1번: 플리츠 스커트", "움직이기 편하고 귀여워! 💕", &[]),
            Choice::new("2", "2번: 테니스 반바지", "가볍고 좋아. 뛰기 딱이야!", &[]),
            Choice::new(
                "3",
                "3번: 너무 긴 스커트",
                "발목이… 걸릴 것 같아. 괜찮겠지?",
                &[AddTension(1)],
            ),
            Choice::new(
                "4",
                "4번: 이상하게 젖은 옷",
                "…이 옷, 왜 축축하지?",
                &[IncrementIgnored(1), AddTension(2)],
            ),
        ],
        secondary: Some(Secondary {
            banner: "계속 문을 쳐다보게 돼. 기분이 나빠.",
            flash: None,
            choices: &[
                Choice::new(
                    "door_check",
                    "문을 다시 잠근다",
                    "일단 잠궜어. 그나마 기분이 나아졌어.",
                    &[SetFlag(Flag::CheckedDoor), AddTension(1)],
                ),
                Choice::new(
                    "ignore",
                    "무시한다",
                    "응. 아무 일도 없을 거야.",
                    &[IncrementIgnored(1), AddTension(1)],
                ),
            ],
        }),
    },
    Stage {
        number: 4,
        note: "아까 문 말이야…\n분명 닫아놨던 것 같은데 🤔\n괜히 기분이 찜찜하네",
        prompt: "인스타에 OOTD 스토리 올릴 건데, 테마는 뭘로 할까?",
        choices: &[
            Choice::new("1", "1번: 핑크 포인트", "역시 핑크지! 오늘은 완벽해 💗", &[]),
            Choice::new("2", "2번: 화이트 톤", "깨끗해. 마음이 편해져.", &[]),
            Choice::new("3", "3번: 블랙 포인트", "어두운 색이 끌릴 때도 있지.", &[AddTension(1)]),
            Choice::new(
                "4",
                "4번: 다 뒤덮인 더러운 색",
                "진심이야?",
                &[IncrementIgnored(1), AddTension(2)],
            ),
        ],
        secondary: Some(Secondary {
            banner: "계속 어디에서 숨소리가 들리는 것 같아...",
            flash: None,
            choices: &[
                Choice::new(
                    "listen",
                    "문 쪽에 귀를 댄다",
                    "… 갑자기 무슨 소리도 안 나. 너무 조용해.",
                    &[AddTension(2)],
                ),
                Choice::new(
                    "ignore",
                    "무시한다",
                    "응. 귀찮아…",
                    &[IncrementIgnored(1), AddTension(1)],
                ),
            ],
        }),
    },
    Stage {
        number: 5,
        note: "창문 쪽이 조금… 이상해.\n커튼을 닫아둘까?",
        prompt: "액세서리를 고를까? (가벼운 것만!)",
        choices: &[
            Choice::new("1", "1번: 하트 헤어핀", "귀엽지? 오늘은 내 날이야 💕", &[]),
            Choice::new("2", "2번: 테니스 캡", "스포티! 햇빛도 가려주고 좋아.", &[]),
            Choice::new(
                "3",
                "3번: 목을 가리는 초커",
                "왠지 모르게 등골이 오싹해.",
                &[AddTension(2)],
            ),
            Choice::new(
                "4",
                "4번: 아무것도 안 한다",
                "꾸미는 게… 의미가 있을까?",
                &[IncrementIgnored(1), AddTension(2)],
            ),
        ],
        secondary: Some(Secondary {
            banner: "안을 훤히 들여다보기 좋은 구도야.\n....이런 불길한 생각은 그만 하고 싶은데.",
            flash: None,
            choices: &[
                Choice::new(
                    "window",
                    "창문을 본다",
                    "유리 너머로… 뭔가가 지나간 것 같아.",
                    &[SetFlag(Flag::LookedWindow), AddTension(2)],
                ),
                Choice::new(
                    "curtain",
                    "커튼을 닫는다",
                    "커튼이 닫히는 소리가, 너무 크게 들려.",
                    &[AddTension(1)],
                ),
                Choice::new(
                    "ignore",
                    "무시한다",
                    "괜찮아. 괜찮아…",
                    &[IncrementIgnored(1), AddTension(2)],
                ),
            ],
        }),
    },
    Stage {
        number: 6,
        note: "…\n그냥 집에 있으면 안 될까?\n네가 정해줘.",
        prompt: "나갈까? 말까?",
        choices: &[
            Choice::new("1", "1번: 편한 운동화", "…도망치기 좋겠네.", &[AddTension(2)]),
            Choice::new(
                "2",
                "2번: 끈이 많은 신발",
                "끈이… 자꾸 풀릴 것 같아.",
                &[IncrementIgnored(1), AddTension(2)],
            ),
            Choice::new(
                "3",
                "3번: 너무 작은 신발",
                "발이 아파. 그래도 참아야 해?",
                &[IncrementIgnored(1), AddTension(2)],
            ),
            Choice::new(
                "4",
                "4번: 맨발",
                "발소리를… 줄이면 되는 거지?",
                &[IncrementIgnored(1), AddTension(3)],
            ),
        ],
        secondary: Some(Secondary {
            banner: "밖은 공터야.\n그래서 더 잘 보여.",
            flash: None,
            choices: &[
                Choice::new(
                    "go_out",
                    "그래도 나간다",
                    "응… 약속은 약속이니까.",
                    &[AddTension(2)],
                ),
                Choice::new(
                    "stay",
                    "집에 남아 있는다",
                    "문을 다시 잠그자. 숨을 크게 쉬자.",
                    &[SetFlag(Flag::StayedHome), AddTension(2)],
                ),
            ],
        }),
    },
    Stage {
        number: 7,
        note: "방 안에\n다른 숨소리가 있어.",
        prompt: "이제 옷이 문제가 아냐.",
        choices: &[
            Choice::new("1", "1번: (아무것도) 고르지 않는다", "너무 조용해. 너무…", &[AddTension(2)]),
            Choice::new("2", "2번: (아무것도) 고르지 않는다", "시간이… 늘어난다.", &[AddTension(2)]),
            Choice::new("3", "3번: (아무것도) 고르지 않는다", "심장이 시끄럽다.", &[AddTension(2)]),
            Choice::new(
                "4",
                "4번: (아무것도) 고르지 않는다",
                "문고리가… 돌아간다.",
                &[IncrementIgnored(1), AddTension(3)],
            ),
        ],
        secondary: Some(Secondary {
            banner: "제발제발제발제발제발제발",
            flash: None,
            choices: &[
                Choice::new(
                    "open",
                    "문을 연다",
                    "문이 열리는 순간, 공기가 바뀐다.",
                    &[AddTension(3)],
                )
                .fatal("문 밖에서 누군가 웃고 있었어."),
                Choice::new(
                    "lights",
                    "불을 끈다",
                    "깜깜해지자… 더 가까워진다.",
                    &[AddTension(3)],
                )
                .fatal("어둠 속에서 누군가 내 이름을 불렀어."),
                Choice::new("lock", "문을 잠근다", "잠금이… 믿음직하지 않아.", &[AddTension(3)]),
                Choice::new("hold", "숨을 죽인다", "…(숨소리만 남는다)", &[AddTension(2)]),
            ],
        }),
    },
    Stage {
        number: 8,
        note: "난 끝이야.",
        prompt: "루시는… 어디로 가야 할까?",
        choices: &[
            Choice::new("1", "1번: (엔딩으로 간다)", "…", &[]),
            Choice::new("2", "2번: (엔딩으로 간다)", "…", &[]),
            Choice::new("3", "3번: (엔딩으로 간다)", "…", &[]),
            Choice::new("4", "4번: (엔딩으로 간다)", "…", &[]),
        ],
        secondary: Some(Secondary {
            banner: "제발제발제발제발제발제발.",
            flash: None,
            choices: &[
                Choice::new("end_a", "커튼 뒤에 숨는다", "조용히… 숨을 참는다.", &[]),
                Choice::new("end_b", "그대로 나간다", "밖은 조용했다. 너무 조용했다.", &[]),
                Choice::new("end_c", "문을 바라본다", "문은… 이미 열려 있었다.", &[]),
            ],
        }),
    },
];

/// Title and closing text for an ending.
pub fn ending_text(ending: Ending) -> (&'static str, &'static str) {
    match ending {
        Ending::A => (
            "ENDING A",
            "루시는 결국 약속에 가지 않았고, 경찰을 불렀다.\n밖은 비로소 조용해졌다.",
        ),
        Ending::B => (
            "ENDING B",
            "루시는 끝까지 못 들은 척을 했다. \n하지만 어디에선가, 옷장 쪽에서, 계속... 누군가의 숨소리가 들려 온다.",
        ),
        Ending::C => (
            "ENDING C",
            "“루시, 내  사랑. 왜 계속 못 들은 척했어?”\n“내가 계속 밖에서 기다리고 있었는데.”",
        ),
    }
}
