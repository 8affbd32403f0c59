/*!
# `FOR <variable>=<start> TO <limit> [STEP <step>]`

## Purpose
Repeat the statements up to the matching `NEXT` for a range of values.

## Remarks
The start, limit and step are evaluated once, when `FOR` runs. The
variable is set to the start and the body runs. Each `NEXT` adds the
step and loops again while the variable has not passed the limit.
A positive step counts up, a negative step counts down.

Without `STEP` the step is 1. A step of 0 runs the body once.
The body always runs at least once, even if the start is already
beyond the limit. The loop resumes at the statement after `FOR`,
so a whole loop fits on one line.

## Example 1
```text
10 FOR N=10 TO 1 STEP -3
20 PRINT "COUNTDOWN";N
30 NEXT N
RUN
COUNTDOWN 10
COUNTDOWN 7
COUNTDOWN 4
COUNTDOWN 1
```

## Example 2
```text
FOR X=1 TO 2:FOR Y=5 TO 6:PRINT X,Y:NEXT Y,X
1 5
1 6
2 5
2 6
```

*/
